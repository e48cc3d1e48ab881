//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, actions,
    px,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::assets::Assets;
use crate::components::primitives::icon::IconRegistry;
use crate::features::bordados::page::BordadosPage;
use crate::i18n::t;
use crate::states::AppConfig;

actions!(bordados, [Quit]);

/// Run the Bordados application
pub fn run_app(config: AppConfig) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let registry = IconRegistry::bootstrap();
        info!(icons = registry.len(), "Icon registry ready");
        cx.set_global(registry);

        let title = t(config.locale(), "app-title");
        let header_height = config.header_height;
        let size = gpui::size(px(config.window_width), px(config.window_height));
        cx.set_global(config);

        let bounds = Bounds::centered(None, size, cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let page = cx.new(|cx| BordadosPage::new(header_height, window, cx));
            cx.new(|cx| Root::new(page, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
