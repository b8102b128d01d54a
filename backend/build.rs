use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    } else if !out_dir.join("dist").exists() {
        // The embedded bundle must exist for include_dir! even when the
        // frontend has not been built yet.
        fs::create_dir_all(out_dir.join("dist")).unwrap();
        fs::write(
            out_dir.join("dist/index.html"),
            "<!DOCTYPE html><html><body>Frontend bundle not built yet. Run trunk build in frontend/ first.</body></html>\n",
        )
        .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
