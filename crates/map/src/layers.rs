use data::feature::{Feature, FeatureCollection, NoiseLevel};

use crate::symbology::{CircleStyle, HeatmapStyle};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub &'static str);

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Circle(CircleStyle),
    Heatmap(HeatmapStyle),
}

/// Which features of the source a layer renders.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FeatureFilter {
    All,
    NoiseEquals(NoiseLevel),
}

impl FeatureFilter {
    pub fn matches(&self, feature: &Feature) -> bool {
        match self {
            FeatureFilter::All => true,
            FeatureFilter::NoiseEquals(level) => feature.noise == *level,
        }
    }
}

/// A declarative visual encoding bound to a data source.
///
/// Static, defined at startup, never mutated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayerDefinition {
    pub id: LayerId,
    pub source: &'static str,
    pub paint: Paint,
    pub filter: FeatureFilter,
}

impl LayerDefinition {
    /// The subset of `source` features this layer would render, in source
    /// order.
    pub fn extract<'a>(&self, source: &'a FeatureCollection) -> Vec<&'a Feature> {
        source
            .features()
            .iter()
            .filter(|f| self.filter.matches(f))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use data::feature::{Feature, FeatureCollection, NoiseLevel};
    use foundation::geo::LngLat;

    use super::{FeatureFilter, LayerDefinition, LayerId, Paint};
    use crate::symbology::HeatmapStyle;

    fn spot(name: &str, noise: NoiseLevel) -> Feature {
        Feature {
            location: LngLat::new(0.0, 0.0),
            name: name.to_string(),
            vibe: String::new(),
            best_for: String::new(),
            noise,
        }
    }

    fn heat_def(filter: FeatureFilter) -> LayerDefinition {
        LayerDefinition {
            id: LayerId("test"),
            source: "studyspots",
            paint: Paint::Heatmap(HeatmapStyle {
                intensity: 1.0,
                radius: 1.0,
                opacity: 1.0,
                max_zoom: None,
            }),
            filter,
        }
    }

    #[test]
    fn extract_with_all_filter_keeps_source_order() {
        let source = FeatureCollection::new(vec![
            spot("a", NoiseLevel::Quiet),
            spot("b", NoiseLevel::Social),
        ]);
        let got = heat_def(FeatureFilter::All).extract(&source);
        let names: Vec<&str> = got.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn extract_with_noise_filter_keeps_only_matches() {
        let source = FeatureCollection::new(vec![
            spot("a", NoiseLevel::Quiet),
            spot("b", NoiseLevel::Mixed),
            spot("c", NoiseLevel::Social),
        ]);
        let def = heat_def(FeatureFilter::NoiseEquals(NoiseLevel::Quiet));
        let got = def.extract(&source);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "a");
    }
}
