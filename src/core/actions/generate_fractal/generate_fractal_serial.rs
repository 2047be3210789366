use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the algorithm's frame in row-major order on the
/// calling thread.
///
/// The token is polled at the start of each row and every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels within a row. The first algorithm
/// failure aborts the pass.
pub fn generate_fractal_serial<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    let mut results = Vec::with_capacity(pixel_rect.size() as usize);

    for y in pixel_rect.top_left().y..=pixel_rect.bottom_right().y {
        for (i, x) in (pixel_rect.top_left().x..=pixel_rect.bottom_right().x).enumerate() {
            if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                return Err(GenerateFractalError::Cancelled(Cancelled));
            }

            let result = algorithm
                .compute(Point { x, y })
                .map_err(GenerateFractalError::Algorithm)?;
            results.push(result);
        }
    }

    Ok(results)
}
