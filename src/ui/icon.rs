//! Zoom-dependent sizing for device icons.

use crate::core::constants::{ICON_MAX_ZOOM, ICON_MIN_ZOOM, MAX_ICON_SIZE, MIN_ICON_SIZE};

/// Computes the device icon size in pixels for a zoom level.
///
/// Sizes are pinned to [`MIN_ICON_SIZE`] at or below zoom 18 and to
/// [`MAX_ICON_SIZE`] at or above zoom 20, with linear interpolation rounded
/// to the nearest integer in between. Callers must supply a finite zoom.
pub fn icon_size(zoom: f64) -> u32 {
    if zoom <= ICON_MIN_ZOOM {
        MIN_ICON_SIZE
    } else if zoom >= ICON_MAX_ZOOM {
        MAX_ICON_SIZE
    } else {
        let span = (MAX_ICON_SIZE - MIN_ICON_SIZE) as f64;
        let size =
            MIN_ICON_SIZE as f64 + (zoom - ICON_MIN_ZOOM) * span / (ICON_MAX_ZOOM - ICON_MIN_ZOOM);
        size.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_size_below_and_at_min_zoom() {
        assert_eq!(icon_size(0.0), 16);
        assert_eq!(icon_size(15.0), 16);
        assert_eq!(icon_size(18.0), 16);
    }

    #[test]
    fn test_icon_size_at_and_above_max_zoom() {
        assert_eq!(icon_size(20.0), 32);
        assert_eq!(icon_size(22.0), 32);
    }

    #[test]
    fn test_icon_size_midpoint() {
        assert_eq!(icon_size(19.0), 24);
    }

    #[test]
    fn test_icon_size_monotone_on_transition_range() {
        let mut previous = icon_size(18.0);
        let mut zoom = 18.0;
        while zoom <= 20.0 {
            let size = icon_size(zoom);
            assert!(size >= previous, "size decreased at zoom {}", zoom);
            previous = size;
            zoom += 0.05;
        }
    }
}
