//! Static screen geometry
//!
//! Resting positions of every element, computed once per screen size. The
//! transition and keyboard shift only ever move these rectangles vertically.

use verdure_platform::{Rect, ScreenSize};

/// Height of a sign-in button (17px vertical padding around a 20px label)
pub const BUTTON_HEIGHT: f32 = 54.0;
/// Vertical margin around each sign-in button
pub const BUTTON_MARGIN: f32 = 10.0;
/// Corner radius of sign-in buttons and the SIGN IN button
pub const BUTTON_RADIUS: f32 = 35.0;
/// Diameter of the round close button
pub const CLOSE_BUTTON_SIZE: f32 = 50.0;
/// How far the close button pokes above the form container
pub const CLOSE_BUTTON_OVERHANG: f32 = 30.0;
/// Height of a credential field
pub const FIELD_HEIGHT: f32 = 50.0;
/// Vertical margin around credential fields
pub const FIELD_MARGIN: f32 = 5.0;
/// Horizontal inset of credential fields from the form card edges
pub const FIELD_INSET: f32 = 20.0;

/// Resting rectangles of every element on the login screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    pub size: ScreenSize,
    /// Full-screen background image (bottom inset is animated)
    pub background: Rect,
    pub login_button: Rect,
    pub facebook_button: Rect,
    /// Bottom third holding the credential form, before its slide offset
    pub form_container: Rect,
    /// Card behind the credential fields
    pub form_card: Rect,
    pub email_field: Rect,
    pub password_field: Rect,
    pub sign_in_button: Rect,
    pub close_button: Rect,
}

impl ScreenLayout {
    pub fn compute(size: ScreenSize) -> Self {
        let (w, h) = (size.width, size.height);
        let third = h / 3.0;

        let background = Rect::new(0.0, 0.0, w, h);

        // Sign-in buttons, stacked and centered in the bottom third. Short
        // screens shrink the slots so both buttons still fit.
        let buttons_top = h - third;
        let button_scale = fit_scale(third, 2.0 * (BUTTON_HEIGHT + 2.0 * BUTTON_MARGIN));
        let button_height = BUTTON_HEIGHT * button_scale;
        let button_margin = BUTTON_MARGIN * button_scale;
        let slot = button_height + 2.0 * button_margin;
        let button_width = w * 3.0 / 4.0;
        let button_x = (w - button_width) / 2.0;
        let stack_top = buttons_top + (third - 2.0 * slot) / 2.0;
        let button = |row: f32| {
            Rect::new(
                button_x,
                stack_top + row * slot + button_margin,
                button_width,
                button_height,
            )
        };

        // Form container shares the bottom third; it rests off-screen via its offset
        let form_container = Rect::new(0.0, h - third, w, third);
        let card_width = w * 0.85;
        let card_height = third * 0.75;
        let form_card = Rect::new(
            (w - card_width) / 2.0,
            form_container.y + (third - card_height) / 2.0,
            card_width,
            card_height,
        );

        // Credential rows are inset inside the card
        let field_scale = fit_scale(card_height, 3.0 * (FIELD_HEIGHT + 2.0 * FIELD_MARGIN));
        let field_height = FIELD_HEIGHT * field_scale;
        let field_margin = FIELD_MARGIN * field_scale;
        let field_slot = field_height + 2.0 * field_margin;
        let field_inset = FIELD_INSET.min(form_card.width / 4.0);
        let field_width = form_card.width - 2.0 * field_inset;
        let fields_top = form_card.y + (card_height - 3.0 * field_slot) / 2.0;
        let field = |row: f32| {
            Rect::new(
                form_card.x + field_inset,
                fields_top + row * field_slot + field_margin,
                field_width,
                field_height,
            )
        };

        let close_button = Rect::new(
            w / 2.0 - CLOSE_BUTTON_SIZE / 2.0,
            form_container.y - CLOSE_BUTTON_OVERHANG,
            CLOSE_BUTTON_SIZE,
            CLOSE_BUTTON_SIZE,
        );

        Self {
            size,
            background,
            login_button: button(0.0),
            facebook_button: button(1.0),
            form_container,
            form_card,
            email_field: field(0.0),
            password_field: field(1.0),
            sign_in_button: field(2.0),
            close_button,
        }
    }
}

/// Scale factor that fits `needed` into `available` (never enlarges)
fn fit_scale(available: f32, needed: f32) -> f32 {
    (available / needed).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> ScreenLayout {
        ScreenLayout::compute(ScreenSize::new(375.0, 812.0).unwrap())
    }

    fn landscape() -> ScreenLayout {
        ScreenLayout::compute(ScreenSize::new(812.0, 375.0).unwrap())
    }

    fn within(inner: Rect, outer: Rect) -> bool {
        const EPS: f32 = 1e-3;
        inner.x >= outer.x - EPS
            && inner.y >= outer.y - EPS
            && inner.right() <= outer.right() + EPS
            && inner.bottom() <= outer.bottom() + EPS
    }

    fn assert_buttons_fit(layout: &ScreenLayout) {
        let h = layout.size.height;
        let third = Rect::new(0.0, h - h / 3.0, layout.size.width, h / 3.0);

        for button in [layout.login_button, layout.facebook_button] {
            assert!(within(button, third), "{button:?} escapes {third:?}");
            assert_eq!(button.width, layout.size.width * 0.75);
        }
        assert!(layout.login_button.bottom() < layout.facebook_button.y);
    }

    fn assert_fields_fit(layout: &ScreenLayout) {
        let rows = [
            layout.email_field,
            layout.password_field,
            layout.sign_in_button,
        ];

        assert!(within(layout.form_card, layout.form_container));
        for row in rows {
            assert!(
                within(row, layout.form_card),
                "{row:?} escapes card {:?}",
                layout.form_card
            );
        }
        for pair in rows.windows(2) {
            assert!(pair[0].bottom() <= pair[1].y + 1e-3);
        }
    }

    #[test]
    fn test_buttons_fit_in_bottom_third() {
        let layout = phone();
        assert_buttons_fit(&layout);
        assert_eq!(layout.login_button.height, BUTTON_HEIGHT);
        assert!((layout.login_button.x + layout.login_button.width / 2.0 - 187.5).abs() < 1e-3);
    }

    #[test]
    fn test_fields_stack_inside_card() {
        let layout = phone();
        assert_fields_fit(&layout);
        assert_eq!(layout.email_field.height, FIELD_HEIGHT);
        assert_eq!(layout.email_field.x, layout.form_card.x + FIELD_INSET);
    }

    #[test]
    fn test_landscape_shrinks_to_fit() {
        let layout = landscape();
        assert_buttons_fit(&layout);
        assert_fields_fit(&layout);
        assert!(layout.login_button.height < BUTTON_HEIGHT);
        assert!(layout.email_field.height < FIELD_HEIGHT);
    }

    #[test]
    fn test_tiny_screen_still_fits() {
        let layout = ScreenLayout::compute(ScreenSize::new(60.0, 90.0).unwrap());
        assert_buttons_fit(&layout);
        assert_fields_fit(&layout);
        assert!(layout.email_field.width > 0.0);
    }

    #[test]
    fn test_close_button_overhangs_form() {
        let layout = phone();
        assert_eq!(layout.close_button.y, layout.form_container.y - 30.0);
        assert_eq!(layout.close_button.x, 375.0 / 2.0 - 25.0);
        assert_eq!(layout.close_button.width, 50.0);
    }

    #[test]
    fn test_form_card_is_centered() {
        let layout = phone();
        let card = layout.form_card;
        assert!((card.x + card.width / 2.0 - 187.5).abs() < 1e-3);
        assert!((card.height - 812.0 / 3.0 * 0.75).abs() < 1e-3);
    }
}
