use crate::errors::{Result, ViewerError};
use crate::image_loader::{Histogram, SourceImage};
use crate::settings::Settings;
use crate::ui::{render_histogram_chart, ChartStyle};

use eframe::egui::{self, Color32, TextureHandle};

/// Lifecycle of the viewer: the image is loaded before the window exists and
/// becomes displayed on the first painted frame. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerState {
    Loaded,
    Displayed,
}

pub struct HistogramViewerApp {
    settings: Settings,
    texture: TextureHandle,
    image_size: [usize; 2],
    histogram: Histogram,
    state: ViewerState,
}

impl HistogramViewerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        image: &SourceImage,
        histogram: Histogram,
        settings: Settings,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let size = [image.width() as usize, image.height() as usize];
        let rgba = image.to_rgba8();
        let pixels = rgba.as_flat_samples();
        let texture = cc.egui_ctx.load_texture(
            "source_image",
            egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
            egui::TextureOptions::LINEAR,
        );

        Self::with_texture(texture, histogram, settings)
    }

    pub fn with_texture(texture: TextureHandle, histogram: Histogram, settings: Settings) -> Self {
        Self {
            image_size: texture.size(),
            settings,
            texture,
            histogram,
            state: ViewerState::Loaded,
        }
    }

    pub fn state(&self) -> ViewerState {
        self.state
    }

    fn mark_displayed(&mut self) {
        if self.state == ViewerState::Loaded {
            self.state = ViewerState::Displayed;
            log::info!(
                "Displaying {}x{} image and histogram of {} pixels",
                self.image_size[0],
                self.image_size[1],
                self.histogram.total()
            );
        }
    }
}

/// True when the user asked to dismiss the window with a key press.
fn dismiss_requested(ctx: &egui::Context) -> bool {
    ctx.input(|i| {
        i.events
            .iter()
            .any(|e| matches!(e, egui::Event::Key { pressed: true, repeat: false, .. }))
    })
}

impl eframe::App for HistogramViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if dismiss_requested(ctx) {
            log::debug!("Key pressed, closing viewer");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let [r, g, b] = self.settings.line_color;
        let style = ChartStyle {
            title: &self.settings.chart_title,
            line_color: Color32::from_rgb(r, g, b),
        };

        egui::TopBottomPanel::bottom("histogram_panel")
            .resizable(true)
            .default_height(self.settings.chart_height)
            .show(ctx, |ui| {
                render_histogram_chart(ui, &self.histogram, &style);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.add(egui::Image::new(&self.texture).shrink_to_fit());
            });
        });

        self.mark_displayed();
    }
}

/// Opens the viewer window and blocks until the user closes it or presses a key.
pub fn present(image: &SourceImage, histogram: Histogram, settings: Settings) -> Result<()> {
    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([width, height])
            .with_min_inner_size([400.0, 400.0]),
        ..Default::default()
    };

    let app_name = settings.window_title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| Ok(Box::new(HistogramViewerApp::new(cc, image, histogram, settings)))),
    )
    .map_err(|e| ViewerError::RenderError {
        message: e.to_string(),
    })
}
