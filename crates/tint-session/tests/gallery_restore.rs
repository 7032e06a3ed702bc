//! End-to-end gallery round trips through `ColorEditor`.

use tint_core::{BUILTIN_COUNT, BaseHue, Color, PaletteBook, builtin, shade_ramp};
use tint_session::{ColorEditor, ColorMode, ColorTarget, EditorConfig, GalleryColors};

fn seeded() -> EditorConfig {
    let mut config = EditorConfig::default();
    config.selection.rng_seed = Some(17);
    config
}

#[test]
fn color_in_palette_restores_by_index() {
    let json = r##"{
        "backgroundColor": "#0f52ba",
        "textColor": "#F0EAD6",
        "backgroundPalette": ["#9B111E","#C8611A","#E0B000","#046307","#0F52BA","#5B2C83","#F0EAD6","#101820"],
        "textPalette": ["#9B111E","#C8611A","#E0B000","#046307","#0F52BA","#5B2C83","#F0EAD6","#101820"]
    }"##;
    let mut editor = ColorEditor::new(seeded()).unwrap();
    assert!(editor.restore_or_default(json).unwrap());

    let bg = editor.colors().selection(ColorTarget::Background);
    assert_eq!((bg.mode, bg.selection, bg.position), (ColorMode::Palette, 2, 4));
    assert_eq!(editor.current_color(ColorTarget::Background).unwrap(), Color::hex(0x0F52BA));
    assert_eq!(editor.current_color(ColorTarget::Text).unwrap(), Color::hex(0xF0EAD6));
    assert_eq!(editor.colors().shade_override(), None);
    assert_eq!(editor.book().custom_count(), 0);
}

#[test]
fn color_outside_palette_restores_as_override() {
    let classic = builtin(0).unwrap();
    let mut record = GalleryColors::from_json(
        &ColorEditor::new(seeded())
            .unwrap()
            .snapshot_gallery_colors()
            .unwrap()
            .to_json()
            .unwrap(),
    )
    .unwrap();
    record.text_color = "#123457".into();

    let mut editor = ColorEditor::new(seeded()).unwrap();
    editor.restore_gallery_colors(&record).unwrap();
    assert_eq!(editor.current_color(ColorTarget::Text).unwrap(), Color::hex(0x123457));
    let over = editor.colors().shade_override().unwrap();
    assert_eq!(over.target, ColorTarget::Text);
    // The selection still points at the saved palette.
    assert_eq!(editor.colors().selection(ColorTarget::Text).selection, 0);
    assert_eq!(
        editor.current_color(ColorTarget::Background).unwrap(),
        classic[4]
    );
}

#[test]
fn variations_selection_survives_round_trip() {
    let mut editor = ColorEditor::new(seeded()).unwrap();
    editor.select_variation(ColorTarget::Background, 3).unwrap();
    let shown = editor.current_color(ColorTarget::Background).unwrap();
    let record = editor.snapshot_gallery_colors().unwrap();

    let mut restored = ColorEditor::new(seeded()).unwrap();
    restored.restore_gallery_colors(&record).unwrap();
    assert_eq!(restored.current_color(ColorTarget::Background).unwrap(), shown);
    // Restoration always lands in palette mode.
    assert_eq!(
        restored.colors().selection(ColorTarget::Background).mode,
        ColorMode::Palette
    );
}

#[test]
fn shade_session_output_restores_into_shared_book() {
    let book = PaletteBook::new();
    let mut editor = ColorEditor::with_book(seeded(), book.clone()).unwrap();
    editor.open_menu(ColorTarget::Text).unwrap();
    editor.open_shade_selector(Color::hex(0x0000FF), 4).unwrap();
    let commit = editor.select_shade_in_column(7, 2).unwrap();
    editor.dismiss_shade_selector().unwrap();
    assert_eq!(book.custom_count(), 2);
    let record = editor.snapshot_gallery_colors().unwrap();

    let mut other = ColorEditor::with_book(seeded(), book.clone()).unwrap();
    other.restore_gallery_colors(&record).unwrap();
    // Found by equality: nothing new appended.
    assert_eq!(book.custom_count(), 2);
    assert_eq!(
        other.colors().selection(ColorTarget::Text).selection,
        BUILTIN_COUNT
    );
    assert_eq!(other.current_color(ColorTarget::Text).unwrap(), commit.color);
    let column = shade_ramp(BaseHue::Blue).to_grid().column(7).unwrap();
    assert_eq!(commit.color, column[2]);
}

#[test]
fn unreadable_json_falls_back() {
    let mut editor = ColorEditor::new(seeded()).unwrap();
    editor.select_direct(ColorTarget::Text, 4, 0).unwrap();
    assert!(!editor.restore_or_default("not json").unwrap());
    assert_eq!(editor.colors().selection(ColorTarget::Text).selection, 0);
}
