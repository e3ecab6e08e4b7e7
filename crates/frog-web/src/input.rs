use glam::Vec2;
use web_sys as web;

/// Project client (CSS pixel) coordinates into board space using the play
/// area's bounding rect. Returns None while the play area has no size, i.e.
/// before it is mounted; callers treat that as a no-op event.
pub fn client_to_board(client_x: f64, client_y: f64, board: &web::Element) -> Option<Vec2> {
    let rect = board.get_bounding_client_rect();
    board_from_rect(client_x, client_y, &rect)
}

#[inline]
pub fn board_from_rect(client_x: f64, client_y: f64, rect: &web::DomRect) -> Option<Vec2> {
    let (w, h) = (rect.width(), rect.height());
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (((client_x - rect.left()) / w) * 100.0) as f32,
        (((client_y - rect.top()) / h) * 100.0) as f32,
    ))
}
