//! Concrete geometry variants.

macro_rules! impl_annotated {
    ($($geometry:ty),* $(,)?) => {
        $(
            impl $crate::metadata::Annotated for $geometry {
                fn metadata(&self) -> Option<&$crate::metadata::MetadataCollection> {
                    self.metadata.as_ref()
                }

                fn metadata_mut(&mut self) -> Option<&mut $crate::metadata::MetadataCollection> {
                    self.metadata.as_mut()
                }

                fn set_metadata(&mut self, metadata: Option<$crate::metadata::MetadataCollection>) {
                    self.metadata = metadata;
                }

                fn take_metadata(&mut self) -> Option<$crate::metadata::MetadataCollection> {
                    self.metadata.take()
                }
            }
        )*
    };
}

mod collection;
mod curve;
mod multi_curve;
mod multi_point;
mod multi_surface;
mod point;
mod surface;

pub use collection::GeometryCollection;
pub use curve::{Curve, Ring};
pub use multi_curve::MultiCurve;
pub use multi_point::MultiPoint;
pub use multi_surface::MultiSurface;
pub use point::Point;
pub use surface::Surface;
