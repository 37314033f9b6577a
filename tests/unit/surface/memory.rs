use super::*;

fn raster(w: u32, h: u32) -> Raster {
    Raster {
        width: w,
        height: h,
        data: vec![255; (w * h * 4) as usize],
    }
}

#[test]
fn starts_hidden_and_unmeasured() {
    let s = InMemorySurface::new();
    assert_eq!(s.viewport(), None);
    assert_eq!(s.size(), None);
    assert_eq!(s.visibility(), Visibility::Hidden);
    assert!(s.presented().is_empty());
}

#[test]
fn present_requires_matching_size() {
    let mut s = InMemorySurface::with_viewport(Canvas::new(4, 4));
    let err = s.present(&raster(4, 4)).unwrap_err();
    assert!(matches!(err, WavegradError::Surface(_)));

    s.resize(Canvas::new(4, 4)).unwrap();
    s.present(&raster(4, 4)).unwrap();
    assert_eq!(s.presented().len(), 1);
    assert_eq!(s.last_presented().map(Raster::canvas), Some(Canvas::new(4, 4)));
}

#[test]
fn reveal_maps_to_visibility() {
    let mut s = InMemorySurface::new();
    s.reveal(Reveal::FadeIn { duration_ms: 250 }).unwrap();
    assert_eq!(s.visibility(), Visibility::FadingIn { duration_ms: 250 });
    s.reveal(Reveal::Immediate).unwrap();
    assert_eq!(s.visibility(), Visibility::Visible);
    s.reveal(Reveal::FadeIn { duration_ms: 0 }).unwrap();
    assert_eq!(s.visibility(), Visibility::Visible);
}
