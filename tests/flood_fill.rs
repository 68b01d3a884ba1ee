use image::Rgba;
use paintbox::canvas::{PixelBuffer, BACKGROUND};
use paintbox::ops::fill::flood_fill;
use paintbox::{PaintSession, Tool};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

#[test]
fn fill_with_region_color_is_idempotent() {
    let mut buf = PixelBuffer::new(8, 8, RED);
    let before = buf.clone();
    flood_fill(&mut buf, 3, 3, RED);
    assert!(buf == before);
}

#[test]
fn fill_is_contained_by_a_one_pixel_border() {
    // 10x10 canvas: blue border, red 8x8 interior.
    let mut buf = PixelBuffer::new(10, 10, BLUE);
    for y in 1..9 {
        for x in 1..9 {
            buf.put_pixel(x, y, RED);
        }
    }

    let green = Rgba([0, 255, 0, 255]);
    flood_fill(&mut buf, 4, 4, green);

    for y in 0..10 {
        for x in 0..10 {
            let interior = (1..9).contains(&x) && (1..9).contains(&y);
            let expected = if interior { green } else { BLUE };
            assert_eq!(buf.get_pixel(x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn fill_recolors_whole_uniform_canvas_and_undo_restores_it() {
    let mut session = PaintSession::new(10, 10);
    session.set_tool(Tool::Fill);
    session.set_color(RED);
    session.pointer_down(5.0, 5.0);

    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(session.buffer().get_pixel(x, y), RED);
        }
    }

    session.undo();
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(session.buffer().get_pixel(x, y), BACKGROUND);
        }
    }
}

#[test]
fn fill_reaches_around_concave_obstacles() {
    // A U-shaped black wall; filling outside it must flow around the arms
    // but never into pixels enclosed by color difference.
    let black = Rgba([0, 0, 0, 255]);
    let mut buf = PixelBuffer::new(7, 7, BACKGROUND);
    for y in 1..6 {
        buf.put_pixel(1, y, black);
        buf.put_pixel(5, y, black);
    }
    for x in 1..6 {
        buf.put_pixel(x, 5, black);
    }

    flood_fill(&mut buf, 0, 0, RED);

    // Outside the U: recolored.
    assert_eq!(buf.get_pixel(0, 0), RED);
    assert_eq!(buf.get_pixel(6, 6), RED);
    // Inside the U is only open at the top, so it is the same region.
    assert_eq!(buf.get_pixel(3, 3), RED);
    // The wall itself is untouched.
    assert_eq!(buf.get_pixel(1, 3), black);
    assert_eq!(buf.get_pixel(3, 5), black);
}
