use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::errors::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Row-parallel counterpart of
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial)
/// on rayon's work-stealing pool.
///
/// Output order and values are identical to the serial pass. Each row polls
/// the token at its start and every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels,
/// and rayon's `Result` collection stops scheduling rows after the first error.
pub fn generate_fractal_parallel_rayon<Alg, C>(
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken,
{
    let pixel_rect = algorithm.pixel_rect();
    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;
    let row_width = pixel_rect.width() as usize;

    let rows: Vec<Vec<Alg::Success>> = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (x_start..=x_end).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(GenerateFractalError::Cancelled(Cancelled));
                }

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect::<Result<_, _>>()?;

    Ok(rows.into_iter().flatten().collect())
}
