use ndarray::{Array2, Zip};

use crate::core::processing::mapper::{ProjectionMapper, SourceCoordinate};
use crate::core::raster::Image;
use crate::error::{Error, Result};

/// Reject empty outputs and sizes whose buffers cannot be addressed.
///
/// The per-pixel footprint is the larger of an RGB sample and a map entry.
pub(crate) fn check_output_dims(output_width: usize, output_height: usize) -> Result<()> {
    if output_width == 0 {
        return Err(Error::invalid_parameter("output_width", output_width));
    }
    if output_height == 0 {
        return Err(Error::invalid_parameter("output_height", output_height));
    }
    let footprint = Image::CHANNELS.max(std::mem::size_of::<Option<SourceCoordinate>>());
    let bytes = output_width
        .checked_mul(output_height)
        .and_then(|n| n.checked_mul(footprint));
    match bytes {
        Some(n) if n <= isize::MAX as usize => Ok(()),
        _ => Err(Error::invalid_parameter(
            "output_width",
            format!("{output_width} (x{output_height} too large)"),
        )),
    }
}

/// Dense per-output-pixel source coordinates, indexed `[[y_out, x_out]]`.
///
/// Built once per conversion and consumed by the resampler. `None` marks
/// pixels the source camera does not cover.
#[derive(Debug, Clone)]
pub struct CoordinateMap {
    coords: Array2<Option<SourceCoordinate>>,
}

impl CoordinateMap {
    /// Run `mapper` over every pixel of an `output_width x output_height` raster.
    pub fn build(mapper: &ProjectionMapper, output_width: usize, output_height: usize) -> Result<Self> {
        check_output_dims(output_width, output_height)?;
        let mut coords = Array2::from_elem((output_height, output_width), None);
        Zip::indexed(&mut coords).par_for_each(|(y, x), slot| {
            *slot = mapper.map_pixel(x, y, output_width, output_height);
        });
        Ok(Self { coords })
    }

    pub fn width(&self) -> usize {
        self.coords.dim().1
    }

    pub fn height(&self) -> usize {
        self.coords.dim().0
    }

    pub fn get(&self, x_out: usize, y_out: usize) -> Option<SourceCoordinate> {
        self.coords.get([y_out, x_out]).copied().flatten()
    }

    /// Number of output pixels with a defined source coordinate.
    pub fn covered(&self) -> usize {
        self.coords.iter().filter(|c| c.is_some()).count()
    }

    pub fn as_array(&self) -> &Array2<Option<SourceCoordinate>> {
        &self.coords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectionModel;

    #[test]
    fn cylindrical_map_is_total() {
        let mapper = ProjectionMapper::new(ProjectionModel::Cylindrical, 40, 20).unwrap();
        let map = CoordinateMap::build(&mapper, 64, 32).unwrap();
        assert_eq!((map.width(), map.height()), (64, 32));
        assert_eq!(map.covered(), 64 * 32);
        for c in map.as_array().iter().flatten() {
            assert!(c.x >= 0.0 && c.x <= 39.0);
            assert!(c.y >= 0.0 && c.y <= 19.0);
        }
    }

    #[test]
    fn matches_direct_mapping() {
        let model = ProjectionModel::Rectilinear {
            fov_horizontal_deg: 100.0,
            fov_vertical_deg: 70.0,
        };
        let mapper = ProjectionMapper::new(model, 33, 21).unwrap();
        let map = CoordinateMap::build(&mapper, 48, 24).unwrap();
        for y in 0..24 {
            for x in 0..48 {
                assert_eq!(map.get(x, y), mapper.map_pixel(x, y, 48, 24));
            }
        }
    }

    #[test]
    fn rectilinear_map_is_partial() {
        let model = ProjectionModel::Rectilinear {
            fov_horizontal_deg: 90.0,
            fov_vertical_deg: 90.0,
        };
        let mapper = ProjectionMapper::new(model, 32, 32).unwrap();
        let map = CoordinateMap::build(&mapper, 64, 32).unwrap();
        let covered = map.covered();
        assert!(covered > 0);
        assert!(covered < 64 * 32 / 2);
        assert!(map.get(0, 16).is_none());
        assert!(map.get(32, 16).is_some());
    }

    #[test]
    fn rejects_empty_or_oversized_outputs() {
        let mapper = ProjectionMapper::new(ProjectionModel::Cylindrical, 4, 4).unwrap();
        assert!(matches!(
            CoordinateMap::build(&mapper, 0, 4),
            Err(Error::InvalidParameters { arg: "output_width", .. })
        ));
        assert!(matches!(
            CoordinateMap::build(&mapper, 4, 0),
            Err(Error::InvalidParameters { arg: "output_height", .. })
        ));
        assert!(matches!(
            CoordinateMap::build(&mapper, usize::MAX / 2, 4),
            Err(Error::InvalidParameters { arg: "output_width", .. })
        ));
        assert!(matches!(
            CoordinateMap::build(&mapper, usize::MAX / 8, 2),
            Err(Error::InvalidParameters { .. })
        ));
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let mapper = ProjectionMapper::new(ProjectionModel::Cylindrical, 4, 4).unwrap();
        let map = CoordinateMap::build(&mapper, 4, 2).unwrap();
        assert!(map.get(4, 0).is_none());
        assert!(map.get(0, 2).is_none());
    }
}
