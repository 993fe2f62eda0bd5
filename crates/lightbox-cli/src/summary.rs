use std::path::Path;

use console::Style;
use lightbox_core::fit::ViewportFit;
use lightbox_core::geometry::Size;
use lightbox_core::watermark::WatermarkLayout;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    capped: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            capped: Style::new().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_fit_summary(
    image: Option<&Path>,
    window: Size,
    fit: &ViewportFit,
    watermark: &WatermarkLayout,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lightbox Preview"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    if let Some(path) = image {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Image"),
            s.path.apply_to(path.display())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Natural"),
        s.value.apply_to(fit.natural)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Window"),
        s.value.apply_to(window)
    );
    println!();

    println!("  {}", s.header.apply_to("Fit"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Bounds"),
        s.value.apply_to(fit.bounds)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Base"),
        s.value.apply_to(fit.base)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(fit.zoom)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Max width"),
        s.value.apply_to(fit.max_display_width)
    );
    if fit.is_capped() {
        println!(
            "    {:<12}{} {}",
            s.label.apply_to("Display"),
            s.value.apply_to(fit.display),
            s.capped.apply_to("(capped)")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Display"),
            s.value.apply_to(fit.display)
        );
    }
    println!();

    println!("  {}", s.header.apply_to("Watermark"));
    println!(
        "    {:<12}{:?}",
        s.label.apply_to("Text"),
        watermark.text
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Font"),
        s.value.apply_to(format!("{}px", watermark.font_size))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Anchor"),
        s.value.apply_to(format!("{}, {}", watermark.anchor_x, watermark.anchor_y))
    );
    println!();
}
