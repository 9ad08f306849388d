//! Root Application
//!
//! Navigation host: owns the event receiver, mounts the view model for the
//! current route and dispatches async results to it.

use company_core::CompanyRepository;
use company_shared::config::UiSettings;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::events::{Dispatch, EventSender, ViewId};
use crate::navigation::Route;
use crate::viewmodel::{FormViewModel, ListViewModel};

pub enum Screen {
    /// Outside this application's scope
    Dashboard,
    List(ListViewModel),
    Form(FormViewModel),
}

pub struct CompanyApp {
    pub route: Route,
    pub screen: Screen,
    repo: Arc<dyn CompanyRepository>,
    ui: UiSettings,
    view: ViewId,
    event_tx: mpsc::UnboundedSender<Dispatch>,
    event_rx: mpsc::UnboundedReceiver<Dispatch>,
}

impl CompanyApp {
    pub fn new(repo: Arc<dyn CompanyRepository>, ui: UiSettings) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            route: Route::Dashboard,
            screen: Screen::Dashboard,
            repo,
            ui,
            view: 0,
            event_tx,
            event_rx,
        }
    }

    /// Drop the current view model and mount the one for `route`
    pub fn navigate(&mut self, route: Route) {
        self.view += 1;
        let tx = EventSender::new(self.view, self.event_tx.clone());
        let repo = Arc::clone(&self.repo);

        info!("Navigating to {}", route);
        self.screen = match &route {
            Route::Dashboard => Screen::Dashboard,
            Route::CompanyList => {
                let mut vm = ListViewModel::new(repo, tx, self.ui.search_debounce());
                vm.on_mount();
                Screen::List(vm)
            }
            Route::CompanyAdd => {
                Screen::Form(FormViewModel::create(repo, tx, self.ui.redirect_delay()))
            }
            Route::CompanyEdit(id) => Screen::Form(FormViewModel::edit(
                repo,
                tx,
                id.clone(),
                self.ui.redirect_delay(),
            )),
        };
        self.route = route;
    }

    pub fn list(&mut self) -> Option<&mut ListViewModel> {
        match &mut self.screen {
            Screen::List(vm) => Some(vm),
            _ => None,
        }
    }

    pub fn form(&mut self) -> Option<&mut FormViewModel> {
        match &mut self.screen {
            Screen::Form(vm) => Some(vm),
            _ => None,
        }
    }

    /// Apply every event already queued, without waiting
    pub fn process_events(&mut self) {
        while let Ok(dispatch) = self.event_rx.try_recv() {
            self.dispatch(dispatch);
        }
    }

    /// Wait for the next event and apply it
    pub async fn next_event(&mut self) {
        if let Some(dispatch) = self.event_rx.recv().await {
            self.dispatch(dispatch);
        }
    }

    /// Apply events until `done` holds
    pub async fn run_until<F>(&mut self, mut done: F)
    where
        F: FnMut(&mut CompanyApp) -> bool,
    {
        self.process_events();
        while !done(self) {
            self.next_event().await;
        }
    }

    fn dispatch(&mut self, dispatch: Dispatch) {
        if dispatch.view != self.view {
            debug!("Dropping event for unmounted view {}: {:?}", dispatch.view, dispatch.event);
            return;
        }

        let next = match &mut self.screen {
            Screen::List(vm) => vm.handle_event(dispatch.event),
            Screen::Form(vm) => vm.handle_event(dispatch.event),
            Screen::Dashboard => None,
        };

        if let Some(route) = next {
            self.navigate(route);
        }
    }
}
