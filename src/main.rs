// src/main.rs
use nannou::prelude::*;

use mystic::{
    animation::{Scene, Ticker},
    config::Config,
    models::Boundaries,
    render::FigureRenderer,
};

struct Model {
    scene: Scene,
    ticker: Ticker,
    renderer: FigureRenderer,
    background: Rgb,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = Config::load().unwrap_or_else(|err| {
        log::error!("{}, using defaults", err);
        Config::default()
    });

    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .build()
        .expect("Failed to build window");

    let seed = config.seed.value.unwrap_or_else(rand::random);
    let [r, g, b] = config.style.background;

    Model {
        scene: Scene::new(seed),
        ticker: Ticker::default(),
        renderer: FigureRenderer::new(config.style.stroke_weight),
        background: rgb(r, g, b),
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    if model.ticker.update(update.since_last.as_secs_f32()) {
        model.scene.step(&surface(app));
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);
    model.renderer.draw_scene(&draw, &model.scene, &surface(app));

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("failed to draw frame: {:?}", err);
    }
}

// The drawable size, handed to the model on every tick.
fn surface(app: &App) -> Boundaries {
    let rect = app.window_rect();
    Boundaries::new(rect.w() as f64, rect.h() as f64)
}
