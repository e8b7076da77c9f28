use tracing_subscriber::EnvFilter;
use widget::WidgetShell;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("widget=info")),
        )
        .init();

    tracing::info!("starting support chat widget");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 760.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Assistant Support",
        options,
        Box::new(|cc| Ok(Box::new(WidgetShell::new(cc)))),
    )
}
