//! Template layouts for outline slides
//!
//! Each template arranges a slide's title and bullets on the fixed
//! 960x540 canvas. Dispatch is an exhaustive match over [`Template`], so a
//! new template cannot be added without a layout.

use crate::{
    wrap_text, Fill, RenderItem, ShapeRenderInfo, SlideScene, TextRenderInfo, VerticalAlign,
    SLIDE_HEIGHT, SLIDE_WIDTH,
};
use doc_model::{Color, FontWeight, Point, Rect, SlideOutline, TextAlign, Template, Theme};

/// Render a slide's outline with the given template
pub fn render_slide(outline: &SlideOutline, template: Template, theme: &Theme, is_title: bool) -> SlideScene {
    match template {
        Template::Modern => modern(outline, theme, is_title),
        Template::Professional => professional(outline, theme, is_title),
        Template::Minimal => minimal(outline, theme, is_title),
        Template::Creative => creative(outline, theme, is_title),
    }
}

/// Text block options for template layouts
struct TextSpec {
    font_size: f64,
    weight: FontWeight,
    color: Color,
    align: TextAlign,
    vertical_align: VerticalAlign,
    line_height: f64,
}

impl TextSpec {
    fn new(font_size: f64, color: Color) -> Self {
        Self {
            font_size,
            weight: FontWeight::Normal,
            color,
            align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
            line_height: 1.3,
        }
    }

    fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    fn light(mut self) -> Self {
        self.weight = FontWeight::Light;
        self
    }

    fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    fn middle(mut self) -> Self {
        self.vertical_align = VerticalAlign::Middle;
        self
    }
}

fn text_block(bounds: Rect, text: &str, spec: TextSpec) -> RenderItem {
    let lines = wrap_text(text, bounds.width, spec.font_size, spec.weight);
    RenderItem::Text(TextRenderInfo {
        element_id: None,
        bounds,
        lines,
        font_size: spec.font_size,
        font_weight: spec.weight,
        color: spec.color,
        align: spec.align,
        vertical_align: spec.vertical_align,
        line_height: spec.line_height,
        padding: 0.0,
    })
}

fn shape(bounds: Rect, fill: Fill, radius: f64) -> RenderItem {
    RenderItem::Shape(ShapeRenderInfo::new(bounds, fill).with_radius(radius))
}

/// Vertical pitch between bullets so up to five fit below the heading
fn bullet_pitch(count: usize, top: f64, default: f64) -> f64 {
    let available = SLIDE_HEIGHT - top - 40.0;
    if count == 0 {
        return default;
    }
    default.min(available / count as f64)
}

fn modern(outline: &SlideOutline, theme: &Theme, is_title: bool) -> SlideScene {
    let tint = theme.primary.with_alpha(0x1a).over(theme.background);
    let mut scene = SlideScene::new(Fill::linear(135.0, theme.background, tint));

    if is_title {
        scene.push(text_block(
            Rect::new(80.0, 150.0, 800.0, 130.0),
            &outline.title,
            TextSpec::new(52.0, theme.primary).bold().centered().middle(),
        ));
        scene.push(shape(
            Rect::new(SLIDE_WIDTH / 2.0 - 50.0, 290.0, 100.0, 4.0),
            Fill::solid(theme.accent),
            2.0,
        ));
        if let Some(subtitle) = outline.subtitle() {
            scene.push(text_block(
                Rect::new(80.0, 310.0, 800.0, 80.0),
                subtitle,
                TextSpec::new(24.0, theme.text).centered(),
            ));
        }
        return scene;
    }

    scene.push(shape(Rect::new(60.0, 50.0, 80.0, 6.0), Fill::solid(theme.primary), 3.0));
    scene.push(text_block(
        Rect::new(60.0, 70.0, 840.0, 70.0),
        &outline.title,
        TextSpec::new(36.0, theme.text).bold(),
    ));
    let top = 160.0;
    let pitch = bullet_pitch(outline.bullets.len(), top, 64.0);
    for (i, bullet) in outline.bullets.iter().enumerate() {
        let y = top + i as f64 * pitch;
        scene.push(shape(Rect::new(64.0, y + 9.0, 12.0, 12.0), Fill::solid(theme.accent), 6.0));
        scene.push(text_block(
            Rect::new(92.0, y, 808.0, pitch - 6.0),
            bullet,
            TextSpec::new(22.0, theme.text),
        ));
    }
    scene
}

fn professional(outline: &SlideOutline, theme: &Theme, is_title: bool) -> SlideScene {
    let mut scene = SlideScene::new(Fill::solid(theme.background));
    scene.push(shape(Rect::new(0.0, 0.0, 8.0, SLIDE_HEIGHT), Fill::solid(theme.primary), 0.0));

    if is_title {
        scene.push(text_block(
            Rect::new(80.0, 170.0, 800.0, 110.0),
            &outline.title,
            TextSpec::new(48.0, theme.primary).bold(),
        ));
        scene.push(shape(Rect::new(80.0, 290.0, 120.0, 4.0), Fill::solid(theme.secondary), 0.0));
        if let Some(subtitle) = outline.subtitle() {
            scene.push(text_block(
                Rect::new(80.0, 310.0, 800.0, 80.0),
                subtitle,
                TextSpec::new(24.0, theme.text),
            ));
        }
        return scene;
    }

    scene.push(text_block(
        Rect::new(60.0, 40.0, 400.0, 20.0),
        "PRESENTATION",
        TextSpec::new(12.0, theme.secondary).bold(),
    ));
    scene.push(text_block(
        Rect::new(60.0, 64.0, 840.0, 70.0),
        &outline.title,
        TextSpec::new(34.0, theme.text).bold(),
    ));
    let top = 160.0;
    let pitch = bullet_pitch(outline.bullets.len(), top, 66.0);
    for (i, bullet) in outline.bullets.iter().enumerate() {
        let y = top + i as f64 * pitch;
        let badge = Rect::new(60.0, y, 36.0, 36.0);
        scene.push(shape(badge, Fill::solid(theme.primary), 6.0));
        scene.push(text_block(
            badge,
            &(i + 1).to_string(),
            TextSpec::new(16.0, theme.background).bold().centered().middle(),
        ));
        scene.push(text_block(
            Rect::new(112.0, y + 4.0, 788.0, pitch - 8.0),
            bullet,
            TextSpec::new(20.0, theme.text),
        ));
    }
    scene
}

fn minimal(outline: &SlideOutline, theme: &Theme, is_title: bool) -> SlideScene {
    let mut scene = SlideScene::new(Fill::solid(theme.background));

    if is_title {
        scene.push(shape(
            Rect::new(SLIDE_WIDTH / 2.0 - 30.0, 160.0, 60.0, 3.0),
            Fill::solid(theme.primary),
            0.0,
        ));
        scene.push(text_block(
            Rect::new(80.0, 180.0, 800.0, 110.0),
            &outline.title,
            TextSpec::new(46.0, theme.text).light().centered().middle(),
        ));
        if let Some(subtitle) = outline.subtitle() {
            scene.push(text_block(
                Rect::new(80.0, 305.0, 800.0, 70.0),
                subtitle,
                TextSpec::new(22.0, theme.text).light().centered(),
            ));
        }
        return scene;
    }

    scene.push(text_block(
        Rect::new(80.0, 60.0, 800.0, 70.0),
        &outline.title,
        TextSpec::new(36.0, theme.text).light(),
    ));
    let top = 160.0;
    let pitch = bullet_pitch(outline.bullets.len(), top, 60.0);
    for (i, bullet) in outline.bullets.iter().enumerate() {
        let y = top + i as f64 * pitch;
        scene.push(text_block(
            Rect::new(80.0, y, 32.0, 32.0),
            "—",
            TextSpec::new(20.0, theme.primary),
        ));
        scene.push(text_block(
            Rect::new(120.0, y, 760.0, pitch - 6.0),
            bullet,
            TextSpec::new(20.0, theme.text).light(),
        ));
    }
    scene
}

fn creative(outline: &SlideOutline, theme: &Theme, is_title: bool) -> SlideScene {
    let outer = theme.accent.with_alpha(0x33).over(theme.background);
    let mut scene = SlideScene::new(Fill::radial(
        Point::new(SLIDE_WIDTH * 0.3, SLIDE_HEIGHT * 0.3),
        700.0,
        theme.background,
        outer,
    ));
    scene.push(shape(
        Rect::new(720.0, -80.0, 320.0, 320.0),
        Fill::solid(theme.accent.with_alpha(0x40)),
        160.0,
    ));

    if is_title {
        scene.push(text_block(
            Rect::new(80.0, 160.0, 800.0, 120.0),
            &outline.title,
            TextSpec::new(54.0, theme.primary).bold().middle(),
        ));
        scene.push(shape(
            Rect::new(80.0, 290.0, 240.0, 8.0),
            Fill::linear(90.0, theme.primary, theme.accent),
            4.0,
        ));
        if let Some(subtitle) = outline.subtitle() {
            scene.push(text_block(
                Rect::new(80.0, 320.0, 800.0, 80.0),
                subtitle,
                TextSpec::new(24.0, theme.text),
            ));
        }
        return scene;
    }

    scene.push(text_block(
        Rect::new(60.0, 50.0, 840.0, 70.0),
        &outline.title,
        TextSpec::new(38.0, theme.primary).bold(),
    ));
    let top = 150.0;
    let pitch = bullet_pitch(outline.bullets.len(), top, 68.0);
    for (i, bullet) in outline.bullets.iter().enumerate() {
        let y = top + i as f64 * pitch;
        let tile = Rect::new(60.0, y, 40.0, 40.0);
        scene.push(shape(tile, Fill::linear(135.0, theme.primary, theme.secondary), 10.0));
        scene.push(text_block(
            tile,
            &(i + 1).to_string(),
            TextSpec::new(18.0, Color::WHITE).bold().centered().middle(),
        ));
        scene.push(text_block(
            Rect::new(118.0, y + 4.0, 780.0, pitch - 8.0),
            bullet,
            TextSpec::new(21.0, theme.text),
        ));
    }
    scene
}
