use crate::components::syllabus::SyllabusList;
use crate::tracking;
use common::model::lead::StoredLead;
use yew::{html, Component, Context, Html};

pub enum Msg {
    ClearSavedDetails,
}

pub struct App {
    /// Snapshot of the locally cached lead record, shown in the footer so
    /// returning visitors can see and clear what the browser remembers.
    saved: Option<StoredLead>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            saved: tracking::stored_lead(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ClearSavedDetails => {
                tracking::clear_tracking_data();
                self.saved = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <header class="site-header">
                    <span class="site-name">{ "ACCA Study Hub" }</span>
                    <span class="site-tagline">
                        { "Syllabus downloads, exam timetables and study resources" }
                    </span>
                </header>
                <main>
                    <SyllabusList />
                </main>
                { self.build_footer(ctx) }
            </div>
        }
    }
}

impl App {
    fn build_footer(&self, ctx: &Context<Self>) -> Html {
        let saved = match &self.saved {
            Some(lead) => lead,
            None => return Html::default(),
        };
        html! {
            <footer class="site-footer">
                <span>{ format!("Saved for downloads: {} ({})", saved.name, saved.email) }</span>
                <button
                    class="ghost-btn"
                    onclick={ctx.link().callback(|_| Msg::ClearSavedDetails)}
                >
                    { "Clear saved details" }
                </button>
            </footer>
        }
    }
}
