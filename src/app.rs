//! Wires configuration, model, skin and renderer together.

use anyhow::Result;
use segbar_config::{BarConfig, ConfigWatcher, OutputFormat};
use segbar_core::{BasicSegment, Rect};
use segbar_model::{NodeFactory, SegmentedBar, Total};
use segbar_render::{Canvas, PlacementReport, SizeHints};
use segbar_skin::SegmentedBarSkin;
use segbar_theme::Theme;
use segbar_widgets::{segment_views, skip_zero};
use std::path::PathBuf;
use tracing::{debug, error, info};

/// A bar model plus the skin that displays it.
pub struct App {
    bar:   SegmentedBar<BasicSegment>,
    skin:  SegmentedBarSkin,
    theme: Theme,
    /// Factory settings the current factory was built from.
    factory_key: (f64, bool),
}

fn factory_for(config: &BarConfig) -> NodeFactory<BasicSegment> {
    let views = segment_views(config.bar.padding);
    if config.bar.hide_empty { skip_zero(views) } else { views }
}

fn factory_key(config: &BarConfig) -> (f64, bool) {
    (config.bar.padding, config.bar.hide_empty)
}

impl App {
    pub fn new(config: &BarConfig) -> Self {
        let mut bar = SegmentedBar::new(factory_for(config))
            .with_orientation(config.bar.orientation)
            .with_total(Total::from(config.bar.total))
            .with_segments(config.basic_segments());
        let skin = SegmentedBarSkin::new(&mut bar);

        Self {
            bar,
            skin,
            theme: Theme::from_config(&config.theme),
            factory_key: factory_key(config),
        }
    }

    /// Push a reloaded configuration into the live model.
    ///
    /// Only what changed is published, so the skin rebuilds when the segment
    /// list or factory changed and merely re-lays out otherwise.
    pub fn apply(&mut self, config: &BarConfig) {
        let segments = config.basic_segments();
        let current: Vec<&BasicSegment> = self.bar.segments().map(|(_, s)| s).collect();
        if current.len() != segments.len() || current.iter().zip(&segments).any(|(a, b)| *a != b) {
            self.bar.set_segments(segments);
        }

        if factory_key(config) != self.factory_key {
            self.factory_key = factory_key(config);
            self.bar.set_factory(factory_for(config));
        }

        self.bar.set_orientation(config.bar.orientation);

        let total = Total::from(config.bar.total);
        if total != self.bar.total_policy() {
            self.bar.set_total(total);
        }

        self.theme = Theme::from_config(&config.theme);
        self.skin.process_events(&self.bar);
    }

    /// Lay out into the configured surface and format the result.
    pub fn render(&mut self, config: &BarConfig) -> Result<String> {
        self.skin.process_events(&self.bar);

        let surface = &config.render;
        let mut canvas = Canvas::new(surface.width, surface.height);

        let hints = SizeHints::of(&self.skin, &self.bar);
        let (width, height) = hints.clamp(f64::from(surface.width), f64::from(surface.height));
        let content = Rect::new(0.0, 0.0, width, height).inset(f64::from(surface.inset));
        debug!(?hints, ?content, "allocated bar");

        let placements = self.skin.layout(&self.bar, content);

        let mut out = match surface.format {
            OutputFormat::Json => {
                PlacementReport::new(&self.bar, &self.skin, content, &placements).to_json()?
            }
            OutputFormat::Text => {
                canvas.paint(&self.skin, &self.theme);
                canvas.to_ansi(&self.theme).join("\n")
            }
            OutputFormat::Plain => {
                canvas.paint(&self.skin, &self.theme);
                canvas.to_plain().join("\n")
            }
        };
        out.push('\n');
        Ok(out)
    }
}

/// Render once, then again after every change to the config file.
pub async fn watch(path: PathBuf, config: BarConfig) -> Result<()> {
    let mut app = App::new(&config);
    let mut config = config;
    print!("{}", app.render(&config)?);

    let (watcher, mut changes) = ConfigWatcher::spawn(&path)?;
    info!("re-rendering on changes to {}", watcher.path().display());

    while changes.recv().await.is_some() {
        match segbar_config::load(&path) {
            Ok(reloaded) => {
                config = reloaded;
                app.apply(&config);
                print!("{}", app.render(&config)?);
            }
            Err(e) => error!("keeping previous config: {e}"),
        }
    }
    Ok(())
}
