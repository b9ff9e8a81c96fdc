use egui::Color32;

pub(crate) fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[derive(Clone, Copy)]
pub(crate) struct TimelinePalette {
    pub background: Color32,
    pub gutter_text: Color32,
    pub hour_line: Color32,
    pub half_hour_line: Color32,
    pub selection_fill: Color32,
    pub selection_border: Color32,
    pub now_line: Color32,
}

impl TimelinePalette {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        if ui.visuals().dark_mode {
            Self {
                background: Color32::from_gray(32),
                gutter_text: Color32::from_gray(150),
                hour_line: Color32::from_gray(70),
                half_hour_line: Color32::from_gray(48),
                selection_fill: with_alpha(Color32::from_rgb(96, 165, 250), 70),
                selection_border: Color32::from_rgb(96, 165, 250),
                now_line: Color32::from_rgb(255, 100, 100),
            }
        } else {
            Self {
                background: Color32::WHITE,
                gutter_text: Color32::from_gray(110),
                hour_line: Color32::from_rgb(229, 231, 235),
                half_hour_line: Color32::from_rgb(243, 244, 246),
                selection_fill: with_alpha(Color32::from_rgb(219, 234, 254), 160),
                selection_border: Color32::from_rgb(147, 197, 253),
                now_line: Color32::from_rgb(239, 68, 68),
            }
        }
    }
}
