//! Depth-ordered compositing of live entities into a [`FrameBuffer`].

use crate::entities::Entity;
use crate::fb::{Attr, Cell, FrameBuffer};

/// Mask characters meaning "use the entity's default attribute".
const MASK_NO_OP: [char; 2] = [' ', '?'];

/// Clear `fb` and draw every live entity into it, farthest first.
///
/// Entities are sorted by depth descending, so a smaller depth overwrites a
/// larger one. Transparent glyphs leave whatever is underneath untouched and
/// cells outside the buffer are clipped.
pub fn composite<'a>(fb: &mut FrameBuffer, entities: impl IntoIterator<Item = &'a Entity>) {
    fb.clear();
    if fb.is_empty() {
        return;
    }

    let mut live: Vec<&Entity> = entities.into_iter().filter(|e| e.is_alive()).collect();
    // Stable sort: equal depths keep collection order.
    live.sort_by(|a, b| b.z().cmp(&a.z()));

    for entity in live {
        draw_entity(fb, entity);
    }
}

fn draw_entity(fb: &mut FrameBuffer, entity: &Entity) {
    let (left, top) = entity.cell();
    let frame = entity.frame();
    let width = fb.width() as i32;
    let height = fb.height() as i32;

    for (row, line) in frame.rows().iter().enumerate() {
        let y = top + row as i32;
        if y < 0 || y >= height {
            continue;
        }
        for (col, &ch) in line.iter().enumerate() {
            let x = left + col as i32;
            if x < 0 || x >= width {
                continue;
            }
            if entity.is_transparent(ch) {
                continue;
            }
            let attr = match frame.mask_at(row, col) {
                Some(code) if !MASK_NO_OP.contains(&code) => Attr::from_code(code),
                _ => entity.default_attr(),
            };
            fb.set(x as u16, y as u16, Cell { ch, attr });
        }
    }
}
