// src/gui/app.rs
use std::{
    error::Error,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::AttendanceDataset,
    fetch::{self, FetchError},
    session::Session,
};

use super::components;

pub const WINDOW_TITLE: &str = "Attendance";

type FetchResult = Result<AttendanceDataset, FetchError>;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(App::new(state, &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub session: Session,

    // search box contents; pushed into the selection on change / Search
    pub search_text: String,

    // status line + pending startup fetch
    pub status: String,
    pub running: bool,
    fetch_rx: Option<Receiver<FetchResult>>,

    // blocking notice (fetch failure); UI is disabled while set
    pub alert: Option<String>,
}

impl App {
    pub fn new(mut state: AppState, ctx: &egui::Context) -> Self {
        state.gui.out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let search_text = state.selection.query.clone();
        let url = state.options.source_url.clone();

        logf!(
            "Init: profile={} subject={}",
            state.options.profile.label(),
            state.selection.subject
        );

        let mut app = Self {
            session: Session::new(state),
            search_text,
            status: s!("Idle"),
            running: false,
            fetch_rx: None,
            alert: None,
        };
        app.start_fetch(url, ctx.clone());
        app
    }

    /// One fetch per run, off the UI thread. The result comes back through
    /// the channel and is applied in `poll_fetch`.
    fn start_fetch(&mut self, url: String, ctx: egui::Context) {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let res = fetch::fetch_dataset(&url);
            let _ = tx.send(res);
            ctx.request_repaint();
        });
        self.fetch_rx = Some(rx);
        self.running = true;
        self.status("Fetching attendance data…");
    }

    fn poll_fetch(&mut self) {
        let polled = self.fetch_rx.as_ref().map(|rx| rx.try_recv());

        let res = match polled {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Ok(res)) => res,
            Some(Err(TryRecvError::Disconnected)) => {
                loge!("Fetch: worker exited without a result");
                self.fetch_rx = None;
                self.running = false;
                self.fail(crate::config::consts::FETCH_FAILED_NOTICE);
                return;
            }
        };

        self.fetch_rx = None;
        self.running = false;

        match self.session.apply_fetch(res) {
            Ok(()) => {
                let ds = self.session.dataset();
                let msg = format!(
                    "Loaded {} record(s) in {} subject(s)",
                    ds.record_count(),
                    ds.subject_count()
                );
                self.status(msg);
            }
            Err(e) => self.fail(e.user_message()),
        }
    }

    fn fail(&mut self, notice: &str) {
        self.status("Fetch failed");
        self.alert = Some(s!(notice));
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Push the search box into the selection and re-render.
    pub fn apply_search(&mut self) {
        if self.session.query() != self.search_text {
            self.session.set_query(self.search_text.clone());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();

        let blocked = self.alert.is_some();

        egui::TopBottomPanel::top("selection").show(ctx, |ui| {
            if blocked { ui.disable(); }
            components::selection_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            if blocked { ui.disable(); }
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if blocked { ui.disable(); }
            components::data_table::draw(ui, self);
        });

        components::alert::draw(ctx, self);
    }
}
