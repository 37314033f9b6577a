use super::*;
use crate::surface::Visibility;
use crate::surface::memory::InMemorySurface;
use crate::synth::config::{GradientConfig, Reveal};

fn host(surface: InMemorySurface) -> GradientHost<InMemorySurface> {
    GradientHost::new(
        GradientSynthesizer::new(GradientConfig::default()),
        surface,
    )
}

#[test]
fn ready_uses_measured_viewport_and_reveals() {
    let mut h = host(InMemorySurface::with_viewport(Canvas::new(40, 30)));
    assert!(h.on_surface_ready().unwrap());

    assert_eq!(h.surface().size(), Some(Canvas::new(40, 30)));
    assert_eq!(h.current().map(Raster::canvas), Some(Canvas::new(40, 30)));
    assert_eq!(
        h.surface().visibility(),
        Visibility::FadingIn { duration_ms: 600 }
    );
    assert_eq!(h.generations(), 1);
}

#[test]
fn ready_falls_back_when_unmeasurable() {
    let mut h = host(InMemorySurface::new());
    assert!(h.on_surface_ready().unwrap());
    assert_eq!(h.surface().size(), Some(FALLBACK_CANVAS));
}

#[test]
fn ready_falls_back_per_dimension() {
    let mut h = host(InMemorySurface::with_viewport(Canvas::new(0, 50)));
    h.on_surface_ready().unwrap();
    assert_eq!(h.surface().size(), Some(Canvas::new(800, 50)));
}

#[test]
fn resize_repaints_at_new_size() {
    let mut h = host(InMemorySurface::with_viewport(Canvas::new(20, 10)));
    h.on_surface_ready().unwrap();

    h.surface_mut().set_viewport(Some(Canvas::new(33, 12)));
    assert!(h.on_surface_resized().unwrap());

    let shown = h.surface().last_presented().unwrap();
    assert_eq!(shown.canvas(), Canvas::new(33, 12));
    assert_eq!(h.current(), Some(shown));
    assert_eq!(h.generations(), 2);
}

#[test]
fn failed_generation_leaves_surface_untouched() {
    let opts = SynthOpts {
        parallel: true,
        threads: Some(0),
    };
    let mut h = GradientHost::with_opts(
        GradientSynthesizer::new(GradientConfig::default()),
        InMemorySurface::with_viewport(Canvas::new(20, 10)),
        opts,
    );
    assert!(h.on_surface_ready().is_err());
    assert_eq!(h.surface().size(), None);
    assert_eq!(h.surface().visibility(), Visibility::Hidden);
    assert!(h.current().is_none());
    assert_eq!(h.generations(), 0);
}

#[test]
fn empty_resize_keeps_previous_raster() {
    let mut h = host(InMemorySurface::with_viewport(Canvas::new(20, 10)));
    h.on_surface_ready().unwrap();
    let before = h.current().cloned();

    h.surface_mut().set_viewport(Some(Canvas::new(0, 10)));
    assert!(!h.on_surface_resized().unwrap());
    h.surface_mut().set_viewport(None);
    assert!(!h.on_surface_resized().unwrap());

    assert_eq!(h.current().cloned(), before);
    assert_eq!(h.surface().presented().len(), 1);
    assert_eq!(h.surface().size(), Some(Canvas::new(20, 10)));
}

#[test]
fn reveal_happens_once() {
    let cfg = GradientConfig {
        reveal: Reveal::Immediate,
        ..GradientConfig::default()
    };
    let mut h = GradientHost::new(
        GradientSynthesizer::new(cfg),
        InMemorySurface::with_viewport(Canvas::new(8, 8)),
    );
    h.on_surface_ready().unwrap();
    assert_eq!(h.surface().visibility(), Visibility::Visible);
    h.on_surface_ready().unwrap();
    assert_eq!(h.generations(), 2);
}

#[test]
fn drain_coalesces_consecutive_resizes() {
    let mut h = host(InMemorySurface::with_viewport(Canvas::new(16, 16)));
    h.handle(SurfaceEvent::Ready).unwrap();

    h.surface_mut().set_viewport(Some(Canvas::new(24, 18)));
    let n = h
        .drain([
            SurfaceEvent::Resized,
            SurfaceEvent::Resized,
            SurfaceEvent::Resized,
        ])
        .unwrap();
    assert_eq!(n, 1);
    assert_eq!(h.generations(), 2);
    assert_eq!(h.current().map(Raster::canvas), Some(Canvas::new(24, 18)));
}

#[test]
fn coalesced_output_matches_direct_generation() {
    let mut h = host(InMemorySurface::with_viewport(Canvas::new(16, 16)));
    h.surface_mut().set_viewport(Some(Canvas::new(21, 13)));
    h.drain([
        SurfaceEvent::Ready,
        SurfaceEvent::Resized,
        SurfaceEvent::Resized,
    ])
    .unwrap();

    let direct = h.synthesizer().generate(Canvas::new(21, 13));
    assert_eq!(h.current().cloned(), direct);
}

#[test]
fn drain_flushes_pending_resize_before_ready() {
    let mut h = host(InMemorySurface::with_viewport(Canvas::new(10, 10)));
    let n = h
        .drain([SurfaceEvent::Resized, SurfaceEvent::Ready])
        .unwrap();
    // The resize paints first; the ready signal then repaints as a resize.
    assert_eq!(n, 2);
    assert_eq!(h.generations(), 2);
}
