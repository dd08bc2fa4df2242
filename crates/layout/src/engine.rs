//! The layout pass: form state to positioned draw commands.

use crate::command::{DrawCommand, FontWeight};
use crate::geometry::PageMetrics;
use crate::metrics::text_width_mm;
use crate::options::LayoutOptions;
use form_model::{format_submission_date, FieldKey, FieldSet};

/// Footer department line. Fixed letterhead text, not a form field.
pub const DEPARTMENT_NAME: &str = "Department of Biochemistry and Biotechnology";

/// Footer institution line. Fixed letterhead text, not a form field.
pub const INSTITUTION_NAME: &str = "North South University";

/// Native pixel dimensions of the decoded logo. Layout needs only the
/// aspect ratio; pixel data stays with the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoInfo {
    pub width_px: u32,
    pub height_px: u32,
}

impl LogoInfo {
    /// Height of the logo box at `target_width_mm`, preserving the native
    /// aspect ratio. The box is never stretched to a fixed height.
    pub fn scaled_height_mm(&self, target_width_mm: f64) -> f64 {
        target_width_mm * self.height_px as f64 / self.width_px as f64
    }
}

/// Compute the draw commands for one cover page.
///
/// Deterministic and pure: a single top-to-bottom pass with fixed offsets,
/// no line wrapping and no overflow detection. Every text block is centered
/// on the page's vertical axis.
pub fn layout(
    fields: &FieldSet,
    logo: &LogoInfo,
    page: &PageMetrics,
    opts: &LayoutOptions,
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    push_centered(
        &mut commands,
        fields.title(),
        opts.title_baseline_mm,
        opts.title_size_pt,
        FontWeight::Bold,
        page,
    );
    let mut cursor_mm = opts.title_baseline_mm + opts.block_gap_mm;

    let logo_height_mm = logo.scaled_height_mm(opts.logo_width_mm);
    commands.push(DrawCommand::Image {
        x_mm: (page.width_mm - opts.logo_width_mm) / 2.0,
        y_mm: cursor_mm,
        width_mm: opts.logo_width_mm,
        height_mm: logo_height_mm,
    });
    cursor_mm += logo_height_mm + opts.block_gap_mm;

    // Detail blocks: two-line blocks use the small gap inside and the
    // large gap after; single-line blocks use the large gap.
    let mut pair = |commands: &mut Vec<DrawCommand>, key: FieldKey, value: &str, y_mm: f64| {
        push_label_value_pair(
            commands,
            &format!("{}: ", key.label()),
            value,
            y_mm,
            opts.detail_size_pt,
            page,
        );
    };

    pair(&mut commands, FieldKey::StudentName, fields.effective(FieldKey::StudentName), cursor_mm);
    cursor_mm += opts.line_gap_mm;
    pair(&mut commands, FieldKey::StudentId, fields.effective(FieldKey::StudentId), cursor_mm);
    cursor_mm += opts.section_gap_mm;

    pair(&mut commands, FieldKey::ExpNo, fields.effective(FieldKey::ExpNo), cursor_mm);
    cursor_mm += opts.section_gap_mm;

    pair(&mut commands, FieldKey::SubmittedTo, fields.effective(FieldKey::SubmittedTo), cursor_mm);
    cursor_mm += opts.line_gap_mm;
    pair(&mut commands, FieldKey::CourseName, fields.effective(FieldKey::CourseName), cursor_mm);
    cursor_mm += opts.section_gap_mm;

    pair(&mut commands, FieldKey::Section, fields.effective(FieldKey::Section), cursor_mm);
    cursor_mm += opts.line_gap_mm;
    pair(&mut commands, FieldKey::Semester, fields.effective(FieldKey::Semester), cursor_mm);
    cursor_mm += opts.section_gap_mm;

    let date = format_submission_date(fields.get(FieldKey::SubmissionDate));
    pair(&mut commands, FieldKey::SubmissionDate, &date, cursor_mm);

    let footer_y_mm = page.height_mm - opts.footer_offset_mm;
    push_centered(
        &mut commands,
        DEPARTMENT_NAME.to_string(),
        footer_y_mm,
        opts.department_size_pt,
        FontWeight::Bold,
        page,
    );
    push_centered(
        &mut commands,
        INSTITUTION_NAME.to_string(),
        footer_y_mm + opts.footer_line_gap_mm,
        opts.institution_size_pt,
        FontWeight::Bold,
        page,
    );

    commands
}

/// Center a single run on the page's vertical axis.
fn push_centered(
    commands: &mut Vec<DrawCommand>,
    content: String,
    y_mm: f64,
    size_pt: f64,
    weight: FontWeight,
    page: &PageMetrics,
) {
    let width_mm = text_width_mm(&content, weight, size_pt);
    commands.push(DrawCommand::Text {
        content,
        x_mm: (page.width_mm - width_mm) / 2.0,
        y_mm,
        size_pt,
        weight,
    });
}

/// Center a bold label and a regular value sharing one baseline.
///
/// Each run is measured with its own weight and the pair is centered on the
/// combined width; centering the concatenation under a single weight would
/// place the seam off-axis.
fn push_label_value_pair(
    commands: &mut Vec<DrawCommand>,
    label: &str,
    value: &str,
    y_mm: f64,
    size_pt: f64,
    page: &PageMetrics,
) {
    let label_width_mm = text_width_mm(label, FontWeight::Bold, size_pt);
    let value_width_mm = text_width_mm(value, FontWeight::Regular, size_pt);
    let start_x_mm = (page.width_mm - (label_width_mm + value_width_mm)) / 2.0;

    commands.push(DrawCommand::Text {
        content: label.to_string(),
        x_mm: start_x_mm,
        y_mm,
        size_pt,
        weight: FontWeight::Bold,
    });
    commands.push(DrawCommand::Text {
        content: value.to_string(),
        x_mm: start_x_mm + label_width_mm,
        y_mm,
        size_pt,
        weight: FontWeight::Regular,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::text_width_mm;
    use proptest::prelude::*;

    fn square_logo() -> LogoInfo {
        LogoInfo {
            width_px: 400,
            height_px: 400,
        }
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_form_lays_out_default_cover() {
        let commands = layout(
            &FieldSet::default(),
            &square_logo(),
            &PageMetrics::A4,
            &LayoutOptions::default(),
        );
        let texts = texts(&commands);

        assert_eq!(texts[0], "CHE203L REPORT");
        assert!(texts.contains(&"Submitted By: "));
        assert!(texts.contains(&"Sadia Islam"));
        assert!(texts.contains(&"Date of Submission: "));
        assert!(texts.contains(&"17-08-2025"));
        assert_eq!(texts[texts.len() - 2], DEPARTMENT_NAME);
        assert_eq!(texts[texts.len() - 1], INSTITUTION_NAME);
    }

    #[test]
    fn layout_is_deterministic() {
        let fields = FieldSet::default();
        let a = layout(&fields, &square_logo(), &PageMetrics::A4, &LayoutOptions::default());
        let b = layout(&fields, &square_logo(), &PageMetrics::A4, &LayoutOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn logo_box_preserves_aspect_ratio() {
        let logo = LogoInfo {
            width_px: 800,
            height_px: 600,
        };
        let opts = LayoutOptions::default();
        let commands = layout(&FieldSet::default(), &logo, &PageMetrics::A4, &opts);

        let (width_mm, height_mm, x_mm) = commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Image {
                    width_mm,
                    height_mm,
                    x_mm,
                    ..
                } => Some((*width_mm, *height_mm, *x_mm)),
                _ => None,
            })
            .expect("layout must place the logo");

        assert_eq!(width_mm, opts.logo_width_mm);
        assert!((height_mm - width_mm * 600.0 / 800.0).abs() < 1e-9);
        // Horizontally centered.
        assert!((x_mm + width_mm / 2.0 - PageMetrics::A4.width_mm / 2.0).abs() < 1e-9);
    }

    #[test]
    fn blocks_flow_downward_without_overlap() {
        let commands = layout(
            &FieldSet::default(),
            &square_logo(),
            &PageMetrics::A4,
            &LayoutOptions::default(),
        );
        let mut last_y = f64::MIN;
        for c in &commands {
            let y = match c {
                DrawCommand::Text { y_mm, .. } => *y_mm,
                DrawCommand::Image { y_mm, .. } => *y_mm,
            };
            assert!(y >= last_y - 1e-9, "command painted above its predecessor");
            last_y = y.max(last_y);
        }
    }

    proptest! {
        /// A bold label + regular value pair is centered on the page axis:
        /// the midpoint of the combined run equals half the page width.
        #[test]
        fn label_value_pair_is_centered(
            label in "[ -~]{1,40}",
            value in "[ -~]{0,40}",
        ) {
            let page = PageMetrics::A4;
            let mut commands = Vec::new();
            push_label_value_pair(&mut commands, &label, &value, 100.0, 13.5, &page);

            let (label_x, value_x) = match (&commands[0], &commands[1]) {
                (
                    DrawCommand::Text { x_mm: a, .. },
                    DrawCommand::Text { x_mm: b, .. },
                ) => (*a, *b),
                _ => unreachable!(),
            };

            let label_w = text_width_mm(&label, FontWeight::Bold, 13.5);
            let value_w = text_width_mm(&value, FontWeight::Regular, 13.5);

            // The value starts exactly where the label ends.
            prop_assert!((value_x - (label_x + label_w)).abs() < 1e-9);
            // Combined midpoint sits on the page axis.
            let midpoint = label_x + (label_w + value_w) / 2.0;
            prop_assert!((midpoint - page.width_mm / 2.0).abs() < 1e-6);
        }

        /// Logo height is W * h / w for any native dimensions.
        #[test]
        fn aspect_ratio_rule(w in 1u32..4000, h in 1u32..4000) {
            let logo = LogoInfo { width_px: w, height_px: h };
            let height = logo.scaled_height_mm(70.1);
            prop_assert!((height - 70.1 * h as f64 / w as f64).abs() < 1e-9);
        }
    }
}
