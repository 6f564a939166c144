use eframe::egui::{Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::{
    config::TICKER,
    domain::{AssetClass, Instrument},
    models::MarketBook,
    utils::{format_percent, format_price},
};

pub struct TickerItem {
    pub class: AssetClass,
    pub symbol: String,
    pub text: String,
    pub change: f64,
}

impl TickerItem {
    fn new(class: AssetClass, instrument: &Instrument) -> Self {
        Self {
            class,
            symbol: instrument.symbol.clone(),
            text: format_item(class, instrument),
            change: instrument.change,
        }
    }
}

fn format_item(class: AssetClass, i: &Instrument) -> String {
    format!(
        "{} {} ({})",
        i.symbol,
        format_price(i.price, &i.currency, class),
        format_percent(i.change_percent, true)
    )
}

#[derive(Default)]
pub struct TickerState {
    /// Horizontal offset (pixels)
    offset: f32,
    items: Vec<TickerItem>,
    is_hovered: bool,
    is_dragging: bool,
}

impl TickerState {
    /// Rebuilds the strip from every quote in the book, stocks first.
    pub fn update_data(&mut self, book: &MarketBook) {
        self.items = [AssetClass::Stocks, AssetClass::Forex, AssetClass::Crypto]
            .into_iter()
            .flat_map(|class| {
                book.instruments(class)
                    .iter()
                    .map(move |i| TickerItem::new(class, i))
            })
            .collect();
    }

    /// Draws the strip. Returns the item the user clicked, if any.
    pub fn render(&mut self, ui: &mut Ui) -> Option<(AssetClass, String)> {
        let rect = ui.available_rect_before_wrap();
        let height = TICKER.height;
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height));
        let response = ui.allocate_rect(panel_rect, Sense::click_and_drag());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color);

        self.is_hovered = response.hovered();
        self.is_dragging = response.dragged();

        if self.is_dragging {
            self.offset += response.drag_delta().x;
        } else if !self.is_hovered {
            // Clamp dt so a slow frame does not make the strip jump.
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= TICKER.speed_pixels_per_sec * dt;
        }

        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TICKER.font_size);

        let total_width: f32 = self
            .items
            .iter()
            .map(|item| {
                painter
                    .layout_no_wrap(item.text.clone(), font_id.clone(), Color32::WHITE)
                    .size()
                    .x
                    + TICKER.item_spacing
            })
            .sum();

        if total_width < 1.0 {
            return None;
        }

        // Infinite scroll: keep the offset in (-total_width, 0].
        self.offset %= total_width;
        if self.offset > 0.0 {
            self.offset -= total_width;
        }

        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;
        let mut clicked = None;

        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);

            for item in &self.items {
                let text_color = if item.change > f64::EPSILON {
                    TICKER.text_color_up
                } else if item.change < -f64::EPSILON {
                    TICKER.text_color_down
                } else {
                    TICKER.text_color_neutral
                };

                let galley = painter.layout_no_wrap(item.text.clone(), font_id.clone(), text_color);
                let w = galley.size().x;
                let h = galley.size().y;

                if loop_x + w > 0.0 && loop_x < screen_width {
                    let pos = Pos2::new(
                        (start_pos.x + loop_x).round(),
                        (start_pos.y + (height - h) / 2.0).round(),
                    );
                    painter.galley(pos, galley, text_color);

                    if response.clicked() {
                        if let Some(pointer) = response.interact_pointer_pos() {
                            let item_rect = Rect::from_min_size(pos, Vec2::new(w, height));
                            if item_rect.contains(pointer) {
                                clicked = Some((item.class, item.symbol.clone()));
                            }
                        }
                    }
                }

                loop_x += w + TICKER.item_spacing;
            }
        }

        // Keep animating while scrolling
        if !self.is_hovered && !self.is_dragging {
            ui.ctx().request_repaint();
        }

        clicked
    }
}
