use ggez::{Context, GameResult};
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Rect, Text};
use ggez::event::{self, EventHandler, MouseButton};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::glam::Vec2 as GVec2;
use gravity_engine::*;

const BODY_COLOR: Color = Color::BLACK;
const COLLIDING_COLOR: Color = Color::RED;

// Canvas "cornsilk"
fn background_color() -> Color {
    Color::from_rgb(255, 248, 220)
}

struct MainState {
    scenario: Scenario,
}

impl MainState {
    fn new(_ctx: &mut Context, config: ScenarioConfig) -> GameResult<MainState> {
        Ok(MainState {
            scenario: Scenario::start(config),
        })
    }

    fn is_colliding(&self, index: usize) -> bool {
        self.scenario
            .simulation
            .scene()
            .last_report
            .collisions
            .iter()
            .any(|pair| pair.first == index || pair.second == index)
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let delta_ms = ctx.time.delta().as_secs_f64() * 1000.0;
        self.scenario.tick(delta_ms);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::WHITE);
        let view = self.scenario.config.view;
        let scene = self.scenario.simulation.scene();

        let background = Mesh::new_rectangle(
            ctx,
            DrawMode::fill(),
            Rect::new(0.0, 0.0, view.width as f32, view.height as f32),
            background_color(),
        )?;
        canvas.draw(&background, DrawParam::new());

        for (index, body) in scene.world.bodies().iter().enumerate() {
            let to_screen = body.screen_transform(&scene.camera);
            let points = body
                .shape()
                .transformed(&to_screen)
                .vertices()
                .iter()
                .map(|p| GVec2::new(p.x as f32, p.y as f32))
                .collect::<Vec<_>>();

            let color = if self.is_colliding(index) {
                COLLIDING_COLOR
            } else {
                BODY_COLOR
            };
            let poly_mesh = Mesh::new_polygon(ctx, DrawMode::fill(), &points, color)?;
            canvas.draw(&poly_mesh, DrawParam::new());
        }

        if let Some(dot) = scene.world.body(self.scenario.dot) {
            let p = dot.position();
            let v = dot.velocity;
            let a = dot.acceleration;
            let status = Text::new(format!(
                "p ({:.1}, {:.1})  v ({:.1}, {:.1})  a ({:.1}, {:.1})",
                p.x, p.y, v.x, v.y, a.x, a.y
            ));
            canvas.draw(&status, DrawParam::new().dest(GVec2::new(10.0, 10.0)).color(Color::BLACK));
        }

        let fps = Text::new(format!("{:.0} fps", ctx.time.fps()));
        canvas.draw(
            &fps,
            DrawParam::new()
                .dest(GVec2::new(view.width as f32 - 70.0, 10.0))
                .color(Color::BLACK),
        );

        canvas.finish(ctx)?;
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        _button: MouseButton,
        _x: f32,
        _y: f32,
    ) -> GameResult {
        self.scenario.simulation.click();
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        }
        Ok(())
    }
}

pub fn run_visual(config: ScenarioConfig) -> GameResult {
    let (width, height) = (config.view.width as f32, config.view.height as f32);
    let cb = ggez::ContextBuilder::new("gravity_viewer", "author")
        .window_setup(ggez::conf::WindowSetup::default().title("Gravity"))
        .window_mode(ggez::conf::WindowMode::default().dimensions(width, height));

    let (mut ctx, event_loop) = cb.build()?;
    let state = MainState::new(&mut ctx, config)?;
    event::run(ctx, event_loop, state)
}
