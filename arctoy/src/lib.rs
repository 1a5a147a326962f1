mod controls;
mod edit_session;
mod editor;
mod save;

use druid::widget::{Flex, Label};
use druid::{
    commands, platform_menus, AppLauncher, Color, Env, FileDialogOptions, FileSpec,
    LocalizedString, MenuDesc, MenuItem, SysMods, Widget, WidgetExt, WindowDesc,
};

use edit_session::ArcSession;
use editor::{ArcView, SaveController};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn wasm_main() {
    // This hook is necessary to get panic messages in the console
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    main()
}

pub fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};
        if let Err(e) = SimpleLogger::init(LevelFilter::Debug, LogConfig::default()) {
            eprintln!("failed to install logger: {}", e);
        }
    }

    // describe the main window
    let main_window = WindowDesc::new(build_ui)
        .title("Arc Toy")
        .menu(make_menu())
        .with_min_size((300., 400.))
        .window_size((520.0, 820.0));

    // start the application
    AppLauncher::with_window(main_window)
        .launch(ArcSession::new())
        .expect("Failed to launch application");
}

fn build_ui() -> impl Widget<ArcSession> {
    let status = Label::new(|data: &ArcSession, _: &Env| {
        let description = data.surface.description();
        match data.model.params().validate() {
            Ok(_) => description.to_owned(),
            Err(e) => format!("{}\n{}", description, e),
        }
    })
    .with_text_size(12.0)
    .with_text_color(Color::grey(0.3))
    .padding(10.0);

    Flex::column()
        .with_child(controls::control_panel())
        .with_flex_child(ArcView::default(), 1.0)
        .with_child(status)
        .controller(SaveController)
}

fn file_menu() -> MenuDesc<ArcSession> {
    const SVG_TYPE: FileSpec = FileSpec::new("SVG Image", &[save::SVG_EXTENSION]);
    const JSON_TYPE: FileSpec = FileSpec::new("JSON Data", &[save::JSON_EXTENSION]);

    MenuDesc::new(LocalizedString::new("common-menu-file-menu"))
        .append(platform_menus::mac::file::close())
        .append_separator()
        .append(
            MenuItem::new(
                LocalizedString::new("save-as").with_placeholder("Save As..."),
                commands::SHOW_SAVE_PANEL
                    .with(FileDialogOptions::new().allowed_types(vec![SVG_TYPE, JSON_TYPE])),
            )
            .hotkey(SysMods::Cmd, "s"),
        )
}

/// The main window/app menu.
#[allow(unused_mut)]
fn make_menu() -> MenuDesc<ArcSession> {
    let mut menu = MenuDesc::empty();
    #[cfg(target_os = "macos")]
    {
        menu = menu.append(platform_menus::mac::application::default());
    }

    menu.append(file_menu())
}
