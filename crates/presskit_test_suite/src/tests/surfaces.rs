//! Surface scenarios
//!
//! One physical tap, delivered the way each host surface delivers it.

use anyhow::ensure;
use presskit_core::prelude::*;
use presskit_platform::{EventKind, Surface};

use crate::harness::Gestures;
use crate::runner::TestSuite;

/// Create the surfaces test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("surfaces");

    suite.add("pointer_tap_fires_click", |ctx| {
        let button = ctx.mount();
        let screen = ctx.render_skinned(&button, ctx.recorder().wire(ButtonProps::new()))?;
        screen.get_by_id(button.id())?.tap(Surface::Pointer);
        ensure!(ctx.recorder().fired() == vec![EventKind::Click]);
        Ok(())
    });

    // No dedup: a touch browser's synthesized click fires as well
    suite.add("touch_web_tap_fires_both", |ctx| {
        let button = ctx.mount();
        let screen = ctx.render_skinned(&button, ctx.recorder().wire(ButtonProps::new()))?;
        let outcomes = screen.get_by_id(button.id())?.tap(Surface::TouchWeb);

        ensure!(outcomes == vec![DispatchOutcome::Invoked, DispatchOutcome::Invoked]);
        ensure!(
            ctx.recorder().fired() == vec![EventKind::TouchEnd, EventKind::Click],
            "fired {:?}",
            ctx.recorder().fired()
        );
        Ok(())
    });

    suite.add("native_tap_fires_press", |ctx| {
        let button = ctx.mount();
        let screen = ctx.render_skinned(&button, ctx.recorder().wire(ButtonProps::new()))?;
        screen.get_by_id(button.id())?.tap(Surface::Native);
        ensure!(ctx.recorder().fired() == vec![EventKind::Press]);
        Ok(())
    });

    suite.add("disabled_tap_silent_everywhere", |ctx| {
        let button = ctx.mount();
        let screen = ctx.render_skinned(
            &button,
            ctx.recorder().wire(ButtonProps::new().disabled(true)),
        )?;
        let element = screen.get_by_id(button.id())?;
        for surface in [Surface::Pointer, Surface::TouchWeb, Surface::Native] {
            let outcomes = element.tap(surface);
            ensure!(outcomes.iter().all(|o| *o == DispatchOutcome::Suppressed));
        }
        ensure!(ctx.recorder().total() == 0);
        Ok(())
    });

    suite.add("touch_only_subscriber_on_touch_web", |ctx| {
        let button = ctx.mount();
        let screen = ctx.render_skinned(
            &button,
            ButtonProps::new().on_touch_end(ctx.recorder().on_touch_end()),
        )?;
        let outcomes = screen.get_by_id(button.id())?.tap(Surface::TouchWeb);
        ensure!(outcomes == vec![DispatchOutcome::Invoked, DispatchOutcome::Unsubscribed]);
        ensure!(ctx.recorder().total() == 1);
        Ok(())
    });

    suite.add("surface_names", |_| {
        ensure!("touch_web".parse::<Surface>()? == Surface::TouchWeb);
        ensure!(Surface::Native.to_string() == "native");
        ensure!("hover".parse::<Surface>().is_err());
        Ok(())
    });

    suite
}
