// src/ui/panel.rs
//! Showcase overlay panels
//!
//! Draws the click-to-start overlay, the header, the focus titles, the
//! animated label and the bottom dock from a [`ShowcaseView`]. Nothing here
//! mutates the showcase; clicks come back as [`ShowcaseCommand`]s.

use imgui::{Condition, StyleColor, StyleVar, WindowFlags};

use crate::showcase::{
    content::{HEADER_CREDITS, HEADER_TAG, LOGO_TEXT, START_HINT},
    FocusId, ShowcaseCommand, ShowcasePhase, ShowcaseView,
};

const ACCENT: [f32; 4] = [0.96, 0.78, 0.42, 1.0];
const MUTED: [f32; 4] = [0.72, 0.72, 0.72, 1.0];
const CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

const HEADER_HEIGHT: f32 = 64.0;
const MARGIN: f32 = 24.0;
const DOCK_HEIGHT: f32 = 170.0;

/// Chrome shared by every fixed panel: no title bar, no moving, no saved state
fn panel_flags() -> WindowFlags {
    WindowFlags::NO_DECORATION
        | WindowFlags::NO_MOVE
        | WindowFlags::NO_SAVED_SETTINGS
        | WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS
        | WindowFlags::NO_NAV
}

/// Draws the whole overlay for this frame and returns what the user clicked
pub fn draw_showcase_ui(ui: &imgui::Ui, view: &ShowcaseView) -> Vec<ShowcaseCommand> {
    let mut commands = Vec::new();
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return commands;
    }

    if view.phase != ShowcasePhase::Intro {
        header(ui, display_size, &mut commands);
        focus_titles(ui, view, &mut commands);
        headline_label(ui, view, display_size);
        dock(ui, view, display_size, &mut commands);
    }

    // Last, so it sits above the rest while it fades
    if view.overlay_visible {
        intro_overlay(ui, view, display_size, &mut commands);
    }

    commands
}

fn intro_overlay(
    ui: &imgui::Ui,
    view: &ShowcaseView,
    display_size: [f32; 2],
    commands: &mut Vec<ShowcaseCommand>,
) {
    let _alpha = ui.push_style_var(StyleVar::Alpha(view.overlay_opacity.clamp(0.0, 1.0)));
    let _padding = ui.push_style_var(StyleVar::WindowPadding([0.0, 0.0]));
    let _background = ui.push_style_color(StyleColor::WindowBg, [0.0, 0.0, 0.0, 1.0]);

    ui.window("##intro_overlay")
        .position([0.0, 0.0], Condition::Always)
        .size(display_size, Condition::Always)
        .flags(WindowFlags::NO_DECORATION | WindowFlags::NO_MOVE | WindowFlags::NO_SAVED_SETTINGS)
        .focused(true)
        .build(|| {
            let logo_scale = 3.0 * view.logo_scale;
            ui.set_window_font_scale(logo_scale);
            let logo_size = ui.calc_text_size(LOGO_TEXT);
            ui.set_cursor_pos([
                (display_size[0] - logo_size[0]) * 0.5,
                (display_size[1] - logo_size[1]) * 0.5,
            ]);
            ui.text_colored(ACCENT, LOGO_TEXT);

            ui.set_window_font_scale(1.0);
            let hint_size = ui.calc_text_size(START_HINT);
            ui.set_cursor_pos([
                (display_size[0] - hint_size[0]) * 0.5,
                display_size[1] * 0.5 + logo_size[1] + 12.0,
            ]);
            ui.text_colored(MUTED, START_HINT);

            // Click anywhere to start
            ui.set_cursor_pos([0.0, 0.0]);
            if ui.invisible_button("##start", display_size) && view.overlay_accepts_input {
                commands.push(ShowcaseCommand::Start);
            }
        });
}

fn header(ui: &imgui::Ui, display_size: [f32; 2], commands: &mut Vec<ShowcaseCommand>) {
    let _background = ui.push_style_color(StyleColor::WindowBg, [0.0, 0.0, 0.0, 0.55]);

    ui.window("##header")
        .position([0.0, 0.0], Condition::Always)
        .size([display_size[0], HEADER_HEIGHT], Condition::Always)
        .flags(panel_flags())
        .build(|| {
            ui.set_cursor_pos([MARGIN, 16.0]);
            let _button = ui.push_style_color(StyleColor::Button, CLEAR);
            let logo_color = ui.push_style_color(StyleColor::Text, ACCENT);
            if ui.button(LOGO_TEXT) {
                commands.push(ShowcaseCommand::ReturnToIntro);
            }
            logo_color.pop();

            let mut x = MARGIN + 200.0;
            for credit in HEADER_CREDITS {
                ui.same_line_with_pos(x);
                ui.text_colored(MUTED, credit);
                x += ui.calc_text_size(credit)[0] + 40.0;
            }

            let tag_width = ui.calc_text_size(HEADER_TAG)[0];
            ui.same_line_with_pos(display_size[0] - tag_width - MARGIN);
            ui.text(HEADER_TAG);
        });
}

fn focus_titles(ui: &imgui::Ui, view: &ShowcaseView, commands: &mut Vec<ShowcaseCommand>) {
    ui.window("##titles")
        .position([MARGIN, HEADER_HEIGHT + MARGIN], Condition::Always)
        .flags(panel_flags() | WindowFlags::ALWAYS_AUTO_RESIZE | WindowFlags::NO_BACKGROUND)
        .build(|| {
            for id in FocusId::CYCLE {
                let color = if view.focused == Some(id) { ACCENT } else { MUTED };
                let _button = ui.push_style_color(StyleColor::Button, CLEAR);
                let _text = ui.push_style_color(StyleColor::Text, color);
                if ui.button_with_size(id.title(), [140.0, 0.0]) {
                    commands.push(ShowcaseCommand::Select(id));
                }
            }
        });
}

fn headline_label(ui: &imgui::Ui, view: &ShowcaseView, display_size: [f32; 2]) {
    let _alpha = ui.push_style_var(StyleVar::Alpha(view.label_opacity.clamp(0.0, 1.0)));

    ui.window("##label")
        .position([0.0, HEADER_HEIGHT + MARGIN], Condition::Always)
        .size([display_size[0], 80.0], Condition::Always)
        .flags(panel_flags() | WindowFlags::NO_BACKGROUND | WindowFlags::NO_INPUTS)
        .build(|| {
            ui.set_window_font_scale(2.0 * view.label_scale);
            let size = ui.calc_text_size(view.label_text);
            ui.set_cursor_pos([(display_size[0] - size[0]) * 0.5, 0.0]);
            ui.text(view.label_text);
        });
}

fn dock(
    ui: &imgui::Ui,
    view: &ShowcaseView,
    display_size: [f32; 2],
    commands: &mut Vec<ShowcaseCommand>,
) {
    let width = (display_size[0] * 0.6).clamp(420.0, 900.0);
    let _background = ui.push_style_color(StyleColor::WindowBg, [0.05, 0.05, 0.05, 0.8]);

    ui.window("##dock")
        .position(
            [(display_size[0] - width) * 0.5, display_size[1] - DOCK_HEIGHT - MARGIN],
            Condition::Always,
        )
        .size([width, DOCK_HEIGHT], Condition::Always)
        .flags(panel_flags())
        .build(|| {
            if let Some(content) = view.dock {
                ui.text_colored(ACCENT, content.title);
                ui.separator();
                ui.text_wrapped(content.body);
            }

            ui.set_cursor_pos([width - 90.0, DOCK_HEIGHT - 52.0]);
            if ui.button_with_size("Next >", [70.0, 36.0]) {
                commands.push(ShowcaseCommand::Next);
            }
        });
}
