use asciiquarium::compositor::composite;
use asciiquarium::entities::*;
use asciiquarium::fb::{Attr, Color, FrameBuffer};

use proptest::prelude::*;

fn sprite(glyphs: &str, x: f64, y: f64, z: i32) -> Entity {
    Entity::builder().shape(glyphs).position(x, y, z).build()
}

fn rows(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

// ── Depth order ───────────────────────────────────────────────────────────────

#[test]
fn nearer_entity_wins_overlap() {
    let far = sprite("AAA", 0.0, 0.0, 10);
    let near = sprite("B", 1.0, 0.0, 5);

    let mut fb = FrameBuffer::new(3, 1);
    composite(&mut fb, [&far, &near]);
    assert_eq!(fb.row_text(0), "ABA");

    composite(&mut fb, [&near, &far]);
    assert_eq!(fb.row_text(0), "ABA");
}

#[test]
fn buffer_is_cleared_between_frames() {
    let e = sprite("x", 0.0, 0.0, 0);
    let mut fb = FrameBuffer::new(2, 1);
    composite(&mut fb, [&e]);
    assert_eq!(fb.row_text(0), "x ");
    composite(&mut fb, std::iter::empty::<&Entity>());
    assert_eq!(fb.row_text(0), "  ");
}

#[test]
fn dead_entities_are_not_drawn() {
    let mut e = sprite("x", 0.0, 0.0, 0);
    e.kill();
    let mut fb = FrameBuffer::new(1, 1);
    composite(&mut fb, [&e]);
    assert_eq!(fb.row_text(0), " ");
}

// ── Transparency ──────────────────────────────────────────────────────────────

#[test]
fn transparent_glyphs_show_what_is_behind() {
    let back = sprite("ooo", 0.0, 0.0, 5);
    let front = sprite("x x", 0.0, 0.0, 1);
    let mut fb = FrameBuffer::new(3, 1);
    composite(&mut fb, [&back, &front]);
    assert_eq!(fb.row_text(0), "xox");
}

#[test]
fn question_mark_fill_is_transparent() {
    let back = sprite("~~~~", 0.0, 0.0, 5);
    let front = Entity::builder()
        .shape("(??)")
        .transparent('?')
        .auto_transparent(true)
        .position(0.0, 0.0, 1)
        .build();
    let mut fb = FrameBuffer::new(4, 1);
    composite(&mut fb, [&back, &front]);
    assert_eq!(fb.row_text(0), "(~~)");
}

// ── Attributes ────────────────────────────────────────────────────────────────

#[test]
fn mask_overrides_default_attribute() {
    let e = Entity::builder()
        .frame(Frame::with_mask("abc", "R?"))
        .default_color('g')
        .build();
    let mut fb = FrameBuffer::new(3, 1);
    composite(&mut fb, [&e]);
    assert_eq!(fb.get(0, 0).unwrap().attr, Attr::new(Color::Red, true));
    assert_eq!(fb.get(1, 0).unwrap().attr, Attr::new(Color::Green, false));
    assert_eq!(fb.get(2, 0).unwrap().attr, Attr::new(Color::Green, false));
}

// ── Clipping ──────────────────────────────────────────────────────────────────

#[test]
fn cells_outside_viewport_are_clipped() {
    let e = sprite("abcd\nefgh", -2.0, -1.0, 0);
    let mut fb = FrameBuffer::new(3, 2);
    composite(&mut fb, [&e]);
    assert_eq!(rows(&fb), vec!["gh ", "   "]);
}

#[test]
fn zero_sized_viewport_draws_nothing() {
    let e = sprite("abc", 0.0, 0.0, 0);
    let mut fb = FrameBuffer::new(0, 0);
    composite(&mut fb, [&e]);
    assert!(fb.cells().is_empty());
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn transparent_front_never_hides_back(
        pattern in proptest::collection::vec(prop_oneof![Just(' '), Just('x')], 1..20),
    ) {
        let front: String = pattern.iter().collect();
        let back = "o".repeat(pattern.len());
        let back = sprite(&back, 0.0, 0.0, 9);
        let front = sprite(&front, 0.0, 0.0, 1);

        let mut fb = FrameBuffer::new(pattern.len() as u16, 1);
        composite(&mut fb, [&back, &front]);
        let row = fb.row_text(0);
        for (drawn, &glyph) in row.chars().zip(&pattern) {
            let expected = if glyph == ' ' { 'o' } else { 'x' };
            prop_assert_eq!(drawn, expected);
        }
    }

    #[test]
    fn composite_never_panics_on_any_position(
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        w in 0u16..10,
        h in 0u16..10,
    ) {
        let e = sprite("abc\ndef", x, y, 0);
        let mut fb = FrameBuffer::new(w, h);
        composite(&mut fb, [&e]);
        prop_assert_eq!(fb.cells().len(), w as usize * h as usize);
    }
}
