//! BDD test world for portpanel

use std::sync::Arc;

use cucumber::World;
use portpanel::adapter::ApiAdapter;
use portpanel::dashboard::PageView;
use portpanel::Panel;

use crate::backend::ScriptedBackend;

#[derive(Debug, Default, World)]
pub struct PanelWorld {
    pub backend: Arc<ScriptedBackend>,
    pub adapter: Option<Arc<dyn ApiAdapter>>,
    pub page: Arc<PageView>,
    pub panel: Option<Panel>,
    pub command_result: Option<bool>,
}

impl PanelWorld {
    /// The panel under test, built on first use
    pub fn panel(&mut self) -> &Panel {
        if self.panel.is_none() {
            let adapter = self
                .adapter
                .clone()
                .expect("backend variant not selected");
            self.panel = Some(Panel::new(
                "http://garage.local",
                self.backend.clone(),
                adapter,
                self.page.clone(),
            ));
        }
        self.panel.as_ref().expect("panel just built")
    }
}
