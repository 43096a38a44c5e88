#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;
use std::process::ExitCode;

use fltk::{app, dialog, prelude::*};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chosha::app::{Controller, DiskFileStore, Flow, Host, Message, Result, SettingsStore, dispatch};
use chosha::ui::host::FltkHost;
use chosha::ui::main_window::build_main_window;
use chosha::ui::surface::FltkSurface;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let store = SettingsStore::default_location();
    let initial = store.load();

    let widgets = match build_main_window(&initial.position, &sender) {
        Ok(widgets) => widgets,
        Err(e) => {
            dialog::message_title(e.title());
            dialog::alert_default(&e.to_string());
            return Err(e);
        }
    };
    let mut wind = widgets.wind;

    let surface = FltkSurface::new(widgets.text_editor, sender);
    let mut ctl = Controller::with_settings(surface, DiskFileStore, store, initial);
    let mut host = FltkHost::new(wind.clone());

    wind.show();

    // A shell double-click passes the document as the only argument
    if let Some(arg) = std::env::args_os().nth(1) {
        let path = PathBuf::from(arg);
        if let Err(e) = ctl.open(&path) {
            tracing::warn!("{}", e);
            host.report(&e);
        }
    }
    host.set_title(&ctl.title());

    tracing::info!("Starting Chosha v{}", env!("CARGO_PKG_VERSION"));

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if dispatch(&mut ctl, &mut host, msg) == Flow::Exit {
                host.close();
                app.quit();
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(1)
        }
    }
}
