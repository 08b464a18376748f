use log::{debug, error, info};
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::ShowcaseConfig,
    error::{Result, ShowcaseError},
    gfx::{
        picking::{pick_object, PickResult},
        rendering::RenderEngine,
        scene::Scene,
    },
    showcase::{FocusId, FrameOutcome, Showcase, ShowcaseCommand},
    ui::{draw_showcase_ui, UiManager},
};

/// The showcase window: owns the event loop and everything it drives
pub struct ShowcaseApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: ShowcaseConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    scene: Scene,
    showcase: Showcase,
    cursor: Option<PhysicalPosition<f64>>,
    /// Item under the pointer as last reported to the showcase
    hovered: Option<FocusId>,
    last_frame: Option<Instant>,
    /// Set when the window or GPU can't be brought up; returned from `run`
    startup_error: Option<ShowcaseError>,
}

impl ShowcaseApp {
    /// Creates the event loop and loads the stage
    ///
    /// The window and GPU are created once the event loop resumes.
    pub fn new(config: ShowcaseConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;
        let scene = Scene::load_stage(&config);
        let showcase = Showcase::new(&config);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                ui_manager: None,
                scene,
                showcase,
                cursor: None,
                hovered: None,
                last_frame: None,
                startup_error: None,
            },
        })
    }

    /// Runs until the window is closed
    pub fn run(self) -> Result<()> {
        let ShowcaseApp {
            event_loop,
            mut app_state,
        } = self;

        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut app_state)?;

        match app_state.startup_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = self.config.window_size;
        let window = Arc::new(
            event_loop.create_window(
                WindowAttributes::default()
                    .with_title(self.config.window_title.clone())
                    .with_inner_size(LogicalSize::new(width, height)),
            )?,
        );

        let PhysicalSize { width, height } = window.inner_size();
        let renderer = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            &self.config,
        ))?;

        self.scene
            .init_gpu_resources(renderer.device(), renderer.object_layout());
        self.showcase.rig.camera.resize_projection(width, height);

        let mut ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            &window,
        );
        ui_manager.update_display_size(width, height);

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    fn apply(&mut self, command: ShowcaseCommand) {
        if !self.showcase.handle(command) {
            debug!("{command:?} changed nothing");
        }
    }

    /// Reports hover changes to the showcase as leave/enter pairs
    fn set_hovered(&mut self, item: Option<FocusId>) {
        if item == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.apply(ShowcaseCommand::HoverLeave(previous));
        }
        if let Some(id) = item {
            self.apply(ShowcaseCommand::HoverEnter(id));
        }
        self.hovered = item;
    }

    fn pick_under_cursor(&self) -> Option<PickResult> {
        let cursor = self.cursor?;
        let (width, height) = self.render_engine.as_ref()?.get_surface_size();
        pick_object(
            (cursor.x as f32, cursor.y as f32),
            (width as f32, height as f32),
            &self.showcase.rig.camera,
            &self.scene,
        )
    }

    fn item_under_cursor(&self) -> Option<FocusId> {
        self.pick_under_cursor().map(|pick| pick.item)
    }

    /// Rebuilds all showcase state as if the app had just started
    fn hard_reset(&mut self) {
        info!("idle timeout elapsed, resetting the showcase");
        let aspect = self.showcase.rig.camera.aspect;
        self.showcase = Showcase::new(&self.config);
        self.showcase.rig.camera.aspect = aspect;
        self.scene.reset_animation();
        self.hovered = None;
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.duration_since(last));
        self.last_frame = Some(now);

        if self.showcase.update(dt) == FrameOutcome::HardReset {
            self.hard_reset();
        }
        self.scene.update(dt.as_secs_f32());
        self.scene.set_highlight(self.showcase.highlighted());
        self.showcase.rig.camera.update_view_proj();

        let (Some(render_engine), Some(ui_manager), Some(window)) = (
            self.render_engine.as_mut(),
            self.ui_manager.as_mut(),
            self.window.as_ref(),
        ) else {
            return;
        };

        render_engine.update(self.showcase.rig.camera.uniform);
        self.scene.update_gpu(render_engine.queue());

        let view = self.showcase.view();
        let mut commands = Vec::new();
        render_engine.render_frame_with_ui(&self.scene, |device, queue, encoder, color_attachment| {
            commands = ui_manager.draw(device, queue, encoder, window, color_attachment, |ui| {
                draw_showcase_ui(ui, &view)
            });
        });

        for command in commands {
            self.apply(command);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_graphics(event_loop) {
            error!("failed to start: {err}");
            self.startup_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        if matches!(
            event,
            WindowEvent::CursorMoved { .. }
                | WindowEvent::MouseInput { .. }
                | WindowEvent::MouseWheel { .. }
                | WindowEvent::KeyboardInput { .. }
                | WindowEvent::Touch(_)
        ) {
            self.showcase.notify_input();
        }

        let ui_captured = self
            .ui_manager
            .as_mut()
            .is_some_and(|ui_manager| ui_manager.handle_input(&window, window_id, &event));

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.showcase.rig.camera.resize_projection(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some(position);
                let item = if ui_captured { None } else { self.item_under_cursor() };
                self.set_hovered(item);
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.set_hovered(None);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } if !ui_captured => {
                if let Some(pick) = self.pick_under_cursor() {
                    debug!(
                        "clicked {} at {:?}, {:.2} from the camera",
                        pick.item, pick.intersection_point, pick.distance
                    );
                    self.apply(ShowcaseCommand::Select(pick.item));
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match key_code {
                KeyCode::Escape => event_loop.exit(),
                _ if ui_captured => {}
                KeyCode::ArrowRight | KeyCode::Space => self.apply(ShowcaseCommand::Next),
                KeyCode::Home => self.apply(ShowcaseCommand::ReturnToIntro),
                _ => {}
            },
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
