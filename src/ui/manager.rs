// src/ui/manager.rs
//! ImGui glue between winit input, the overlay panels and the wgpu frame

use imgui::{Context, FontConfig, FontSource, MouseCursor};
use imgui_wgpu::{Renderer, RendererConfig};
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use log::error;
use std::time::Instant;
use wgpu::{CommandEncoder, Device, Queue, TextureFormat, TextureView};
use winit::{
    event::{Event, WindowEvent},
    window::{Window, WindowId},
};

/// Size the font atlas is rasterized at
///
/// Large so the logo and the headline label stay crisp when scaled up.
const FONT_PIXELS: f32 = 24.0;

/// Owns the ImGui context and draws the overlay on top of the stage
///
/// DPI is locked to 1.0 so panel coordinates are physical pixels, the same
/// space picking works in.
pub struct UiManager {
    context: Context,
    platform: WinitPlatform,
    renderer: Renderer,
    frame_started: Instant,
    cursor: Option<MouseCursor>,
}

impl UiManager {
    pub fn new(device: &Device, queue: &Queue, surface_format: TextureFormat, window: &Window) -> Self {
        let mut context = Context::create();
        context.set_ini_filename(None);

        let mut platform = WinitPlatform::new(&mut context);
        platform.attach_window(context.io_mut(), window, HiDpiMode::Locked(1.0));

        context.fonts().add_font(&[FontSource::DefaultFontData {
            config: Some(FontConfig {
                oversample_h: 2,
                pixel_snap_h: true,
                size_pixels: FONT_PIXELS,
                ..Default::default()
            }),
        }]);

        let renderer = Renderer::new(
            &mut context,
            device,
            queue,
            RendererConfig {
                texture_format: surface_format,
                ..Default::default()
            },
        );

        Self {
            context,
            platform,
            renderer,
            frame_started: Instant::now(),
            cursor: None,
        }
    }

    pub fn update_display_size(&mut self, width: u32, height: u32) {
        self.context.io_mut().display_size = [width as f32, height as f32];
    }

    /// Feeds pointer and keyboard events to ImGui
    ///
    /// Returns true when a panel is under the pointer or holds keyboard focus,
    /// in which case the stage must not react to the event.
    pub fn handle_input(&mut self, window: &Window, window_id: WindowId, event: &WindowEvent) -> bool {
        if !is_ui_input(event) {
            return false;
        }

        let forwarded: Event<()> = Event::WindowEvent {
            window_id,
            event: event.clone(),
        };
        self.platform
            .handle_event(self.context.io_mut(), window, &forwarded);

        let io = self.context.io();
        io.want_capture_mouse || io.want_capture_keyboard
    }

    /// Builds one overlay frame with `build` and records it into `encoder`
    ///
    /// The UI pass loads the stage already in `target` and draws over it.
    /// Whatever `build` returns is handed back to the caller.
    pub fn draw<F, R>(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        window: &Window,
        target: &TextureView,
        build: F,
    ) -> R
    where
        F: FnOnce(&imgui::Ui) -> R,
    {
        let now = Instant::now();
        self.context
            .io_mut()
            .update_delta_time(now - self.frame_started);
        self.frame_started = now;

        if let Err(err) = self.platform.prepare_frame(self.context.io_mut(), window) {
            error!("failed to prepare UI frame: {err}");
        }

        let ui = self.context.new_frame();
        let output = build(ui);
        if self.cursor != ui.mouse_cursor() {
            self.cursor = ui.mouse_cursor();
            self.platform.prepare_render(ui, window);
        }

        let draw_data = self.context.render();
        if draw_data.display_size[0] <= 0.0 || draw_data.display_size[1] <= 0.0 {
            return output;
        }

        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Overlay Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Err(err) = self.renderer.render(draw_data, queue, device, &mut pass) {
            error!("failed to render UI: {err:?}");
        }

        output
    }
}

/// Events ImGui needs to see to track hover, clicks and focus
fn is_ui_input(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::CursorMoved { .. }
            | WindowEvent::CursorLeft { .. }
            | WindowEvent::MouseInput { .. }
            | WindowEvent::MouseWheel { .. }
            | WindowEvent::KeyboardInput { .. }
            | WindowEvent::ModifiersChanged(_)
            | WindowEvent::Focused(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn test_only_input_reaches_imgui() {
        assert!(is_ui_input(&WindowEvent::Focused(true)));
        assert!(!is_ui_input(&WindowEvent::Resized(PhysicalSize::new(10, 10))));
        assert!(!is_ui_input(&WindowEvent::RedrawRequested));
        assert!(!is_ui_input(&WindowEvent::CloseRequested));
    }
}
