//! Auto-shrinking font size search

use crate::types::Length;

use super::types::FittedText;

/// Find the largest integer font size, starting at `floor(max_size)` and
/// stepping down by one, whose wrapped height fits `height`.
///
/// `measure` returns the wrapped height of the text at a given size. When
/// nothing down to `min_size` fits, `min_size` is returned with its
/// (overflowing) height; the text is drawn anyway.
pub fn fit_text(
    measure: impl Fn(f64) -> Length,
    height: Length,
    max_size: f64,
    min_size: f64,
) -> FittedText {
    let mut size = max_size.floor();
    while size >= min_size {
        let measured_height = measure(size);
        if measured_height <= height {
            return FittedText { size, measured_height };
        }
        size -= 1.0;
    }

    let measured_height = measure(min_size);
    crate::log::debug!(min_size, height = height.raw(), measured = measured_height.raw(), "text overflows at minimum size");
    FittedText { size: min_size, measured_height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{BuiltinMetrics, wrapped_height};
    use crate::render::defaults::MIN_FONT_SIZE;

    fn fit(text: &str, width: f64, height: f64, max: f64, min: f64) -> FittedText {
        fit_text(
            |size| wrapped_height(text, Length(width), size, &BuiltinMetrics),
            Length(height),
            max,
            min,
        )
    }

    #[test]
    fn short_text_gets_the_maximum() {
        let f = fit("hola", 200.0, 40.0, 30.9, MIN_FONT_SIZE);
        assert_eq!(f.size, 30.0);
        assert!(f.measured_height <= Length(40.0));
    }

    #[test]
    fn returns_first_size_that_fits() {
        // One line of Helvetica is 1.156 em tall: 20pt → 23.12, 17pt → 19.652
        let f = fit("x", 500.0, 20.0, 20.0, MIN_FONT_SIZE);
        assert_eq!(f.size, 17.0);
    }

    #[test]
    fn oversized_text_falls_back_to_minimum() {
        // 200 characters into a 20mm-wide box
        let text = "palabra ".repeat(25);
        let width = crate::types::Length::mm(20.0).raw();
        let f = fit(&text, width, 30.0, 22.0, MIN_FONT_SIZE);
        assert_eq!(f.size, MIN_FONT_SIZE);
        assert!(f.measured_height > Length(30.0));
    }

    #[test]
    fn max_below_min_returns_min() {
        let f = fit("x", 100.0, 100.0, 4.0, MIN_FONT_SIZE);
        assert_eq!(f.size, MIN_FONT_SIZE);
    }

    #[test]
    fn larger_minimum_never_picks_a_larger_fitting_size() {
        let texts = ["uno", "dos palabras juntas", "una frase algo más larga que las demás"];
        for text in texts {
            for height in [8.0, 15.0, 30.0, 60.0] {
                let loose = fit(text, 80.0, height, 40.0, 4.0);
                let strict = fit(text, 80.0, height, 40.0, 10.0);
                // If the loose search found a fitting size above the strict
                // floor, the strict search must find the same one.
                if loose.size >= 10.0 {
                    assert_eq!(loose.size, strict.size, "{text:?} in {height}");
                } else {
                    assert_eq!(strict.size, 10.0);
                }
            }
        }
    }

    #[test]
    fn smaller_box_never_gets_a_larger_font() {
        let text = "texto de prueba con varias palabras";
        let mut previous = f64::INFINITY;
        for height in [80.0, 60.0, 40.0, 25.0, 15.0, 8.0] {
            let f = fit(text, 90.0, height, 40.0, MIN_FONT_SIZE);
            assert!(f.size <= previous);
            previous = f.size;
        }
    }
}
