//! Syllabus catalogue: fetches the published paper list from the backend on
//! first render and shows one download card per paper.
//!
//! The list endpoint never fails outward; when the CMS is down the backend
//! serves its fixtures and tags the payload `fixture`, which this component
//! surfaces as a console warning so the degradation is noticed during
//! development.

use gloo_console::warn;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::content::ContentSource;
use common::model::syllabus::Syllabus;
use common::responses::ContentList;

use crate::components::download::DownloadButton;

pub enum Msg {
    Loaded(ContentList<Syllabus>),
    LoadFailed(String),
}

pub struct SyllabusList {
    syllabi: Vec<Syllabus>,
    error: Option<String>,
    loaded: bool,
}

impl Component for SyllabusList {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            syllabi: Vec::new(),
            error: None,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(list) => {
                if list.source == ContentSource::Fixture {
                    warn!("CMS unavailable, showing the built-in syllabus catalogue");
                }
                self.syllabi = list.data;
                self.error = None;
                true
            }
            Msg::LoadFailed(reason) => {
                self.error = Some(reason);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="syllabus-list">
                <h1>{ "ACCA Syllabus Downloads" }</h1>
                {
                    if let Some(reason) = &self.error {
                        html! {
                            <p class="load-error">
                                { format!("Could not load the syllabus list: {reason}") }
                            </p>
                        }
                    } else {
                        Html::default()
                    }
                }
                <div class="syllabus-grid">
                    { for self.syllabi.iter().map(build_card) }
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get("/api/content/syllabi").send().await;
                match response {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<ContentList<Syllabus>>().await {
                            Ok(list) => link.send_message(Msg::Loaded(list)),
                            Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                        }
                    }
                    Ok(resp) => link.send_message(Msg::LoadFailed(format!(
                        "server answered {}",
                        resp.status()
                    ))),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
        }
    }
}

fn build_card(syllabus: &Syllabus) -> Html {
    html! {
        <article class="syllabus-card" key={syllabus.id.to_string()}>
            <span class="level-badge">{ syllabus.level.as_str().to_ascii_uppercase() }</span>
            <h2>{ &syllabus.title }</h2>
            <p>{ &syllabus.description }</p>
            <p class="syllabus-meta">
                { format!("Version {} (updated {})", syllabus.version, syllabus.updated_at) }
            </p>
            <DownloadButton level={syllabus.level} title={syllabus.title.clone()} />
        </article>
    }
}
