//! # Crystal Structure Model
//!
//! A minimal periodic structure (lattice plus fractional atom sites) built
//! from the cell and atom-site tags of a CIF document. Ingestion merges its
//! dictionary form into each raw record, which is where the `@module`,
//! `@class`, `charge`, `lattice`, `sites` and `properties` columns come from.
//!
//! Sites are taken as listed in the asymmetric unit; symmetry operators are
//! not applied.

mod elements;
mod error;
mod lattice;

#[cfg(test)]
mod tests;

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::cif::{parse_number, CifDocument};

pub use elements::{is_element, parse_species, ParsedSpecies, ELEMENT_SYMBOLS};
pub use error::StructureError;
pub use lattice::Lattice;

/// Value stored in the `@module` field of a structure dictionary
pub const STRUCTURE_MODULE: &str = "cifcte.structure";
/// Value stored in the `@class` field of a structure dictionary
pub const STRUCTURE_CLASS: &str = "Structure";

const CELL_TAGS: [&str; 6] = [
    "_cell_length_a",
    "_cell_length_b",
    "_cell_length_c",
    "_cell_angle_alpha",
    "_cell_angle_beta",
    "_cell_angle_gamma",
];

/// One species occupying a site
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Species {
    /// Element symbol
    pub element: String,
    /// Site occupancy (0–1)
    pub occu: f64,
    /// Formal oxidation state, when the CIF gives one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxidation_state: Option<f64>,
}

/// Atom site in the unit cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Site {
    /// Species on this site
    pub species: Vec<Species>,
    /// Fractional coordinates
    pub abc: [f64; 3],
    /// Cartesian coordinates (Å)
    pub xyz: [f64; 3],
    /// Site label from the CIF
    pub label: String,
    /// Additional site properties
    pub properties: BTreeMap<String, Value>,
}

/// Periodic crystal structure
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// Unit cell
    pub lattice: Lattice,
    /// Sites of the asymmetric unit
    pub sites: Vec<Site>,
    /// Formal charge of the cell contents
    pub charge: f64,
}

impl Structure {
    /// Build a structure from the `_cell_*` and `_atom_site_*` tags of a document.
    pub fn from_cif(doc: &CifDocument) -> Result<Self, StructureError> {
        let mut params = [0.0; 6];
        for (slot, tag) in params.iter_mut().zip(CELL_TAGS) {
            *slot = doc
                .number(tag)
                .ok_or_else(|| StructureError::MissingCellParameter(tag.to_string()))?;
        }
        let [a, b, c, alpha, beta, gamma] = params;
        let lattice = Lattice::from_parameters(a, b, c, alpha, beta, gamma)?;

        let (Some(xs), Some(ys), Some(zs)) = (
            column(doc, "_atom_site_fract_x"),
            column(doc, "_atom_site_fract_y"),
            column(doc, "_atom_site_fract_z"),
        ) else {
            return Err(StructureError::NoSites);
        };
        let labels = column(doc, "_atom_site_label");
        let symbols = column(doc, "_atom_site_type_symbol").or(labels).ok_or(StructureError::NoSites)?;
        let occupancies = column(doc, "_atom_site_occupancy");

        let count = xs.len();
        if count == 0 {
            return Err(StructureError::NoSites);
        }
        if ys.len() != count || zs.len() != count || symbols.len() != count {
            return Err(StructureError::InvalidSite(format!(
                "coordinate columns have lengths {}/{}/{} for {} symbols",
                count,
                ys.len(),
                zs.len(),
                symbols.len()
            )));
        }

        let mut sites = Vec::with_capacity(count);
        for i in 0..count {
            let coordinate = |values: &[String], axis: &str| {
                parse_number(&values[i]).ok_or_else(|| {
                    StructureError::InvalidSite(format!(
                        "site {} has non-numeric fract_{axis} '{}'",
                        i + 1,
                        values[i]
                    ))
                })
            };
            let abc = [coordinate(xs, "x")?, coordinate(ys, "y")?, coordinate(zs, "z")?];

            let parsed = parse_species(&symbols[i])
                .ok_or_else(|| StructureError::UnknownElement(symbols[i].clone()))?;
            let occu = occupancies
                .and_then(|values| values.get(i))
                .and_then(|value| parse_number(value))
                .unwrap_or(1.0);
            let label = labels
                .and_then(|values| values.get(i))
                .cloned()
                .unwrap_or_else(|| parsed.element.clone());

            sites.push(Site {
                species: vec![Species {
                    element: parsed.element,
                    occu,
                    oxidation_state: parsed.oxidation_state,
                }],
                xyz: lattice.cartesian(abc),
                abc,
                label,
                properties: BTreeMap::new(),
            });
        }

        let charge = sites
            .iter()
            .flat_map(|site| &site.species)
            .filter_map(|sp| sp.oxidation_state.map(|ox| ox * sp.occu))
            .sum::<f64>();

        Ok(Self {
            lattice,
            sites,
            charge,
        })
    }

    /// Dictionary form merged into raw records during ingestion.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert("@module".to_string(), Value::from(STRUCTURE_MODULE));
        dict.insert("@class".to_string(), Value::from(STRUCTURE_CLASS));
        dict.insert("charge".to_string(), Value::from(self.charge));
        dict.insert(
            "lattice".to_string(),
            serde_json::to_value(&self.lattice).unwrap_or(Value::Null),
        );
        dict.insert(
            "sites".to_string(),
            serde_json::to_value(&self.sites).unwrap_or(Value::Null),
        );
        dict.insert("properties".to_string(), Value::Object(Map::new()));
        dict
    }

    /// Chemical formula of the listed sites, occupancy weighted, in site order.
    pub fn site_formula(&self) -> String {
        let mut counts: Vec<(&str, f64)> = Vec::new();
        for species in self.sites.iter().flat_map(|site| &site.species) {
            match counts.iter_mut().find(|(el, _)| *el == species.element) {
                Some((_, n)) => *n += species.occu,
                None => counts.push((species.element.as_str(), species.occu)),
            }
        }
        counts.iter().map(|(el, n)| format!("{el}{n}")).collect()
    }
}

fn column<'a>(doc: &'a CifDocument, tag: &str) -> Option<&'a [String]> {
    doc.get(tag).map(|value| value.values())
}
