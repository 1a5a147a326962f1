use druid::{
    commands,
    kurbo::{Circle, Point},
    piet::StrokeStyle,
    widget::{prelude::*, Controller},
    Color, Data,
};

use arcparams::{ARC_START, END_POINT, START_POINT};

use crate::edit_session::ArcSession;

const PATH_COLOR: Color = Color::rgb8(0x4B, 0x4E, 0xFF);
const ANCHOR_COLOR: Color = Color::grey8(0x88);
const ENDPOINT_COLOR: Color = Color::rgb8(0x37, 0xA7, 0x62);
const ANCHOR_RADIUS: f64 = 4.0;

/// Draws the path applied to the session's surface.
#[derive(Debug, Default)]
pub struct ArcView;

impl Widget<ArcSession> for ArcView {
    fn event(&mut self, _: &mut EventCtx, _: &Event, _: &mut ArcSession, _: &Env) {}

    fn lifecycle(&mut self, _: &mut LifeCycleCtx, _: &LifeCycle, _: &ArcSession, _: &Env) {}

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &ArcSession, data: &ArcSession, _: &Env) {
        if !old_data.same(data) {
            ctx.request_paint();
        }
    }

    fn layout(&mut self, _: &mut LayoutCtx, bc: &BoxConstraints, _: &ArcSession, _: &Env) -> Size {
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &ArcSession, _: &Env) {
        let bounds = ctx.size().to_rect();
        ctx.fill(bounds, &Color::WHITE);

        for anchor in [START_POINT, ARC_START, END_POINT].iter() {
            draw_anchor(ctx, (anchor.x, anchor.y).into(), &ANCHOR_COLOR);
        }

        match data.surface.path() {
            Some(path) => ctx.stroke(path, &PATH_COLOR, 2.0),
            None => {
                let dashed = StrokeStyle::new().dash(vec![4.0, 4.0], 0.0);
                ctx.stroke_styled(bounds.inset(-1.0), &Color::grey8(0xbb), 1.0, &dashed);
            }
        }

        if let Ok(arc) = data.model.params().validate() {
            let to = arc.to_svg_arc().to;
            draw_anchor(ctx, (to.x, to.y).into(), &ENDPOINT_COLOR);
        }
    }
}

fn draw_anchor(ctx: &mut PaintCtx, pt: Point, color: &Color) {
    ctx.fill(Circle::new(pt, ANCHOR_RADIUS), color);
}

/// Handles the File menu's save panel.
pub struct SaveController;

impl<W: Widget<ArcSession>> Controller<ArcSession, W> for SaveController {
    fn event(
        &mut self,
        child: &mut W,
        ctx: &mut EventCtx,
        event: &Event,
        data: &mut ArcSession,
        env: &Env,
    ) {
        match event {
            Event::Command(cmd) if cmd.is(commands::SAVE_FILE_AS) => {
                let file_info = cmd.get_unchecked(commands::SAVE_FILE_AS);
                match crate::save::export(file_info.path(), data) {
                    Ok(()) => log::info!("saved {}", file_info.path().display()),
                    Err(e) => log::error!("error saving {}: {}", file_info.path().display(), e),
                }
                ctx.set_handled();
            }
            _ => child.event(ctx, event, data, env),
        }
    }
}
