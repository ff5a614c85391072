use serde::Deserialize;

use super::Segment;
use super::error::Error;
use super::stream::LineStream;

/// Token index of a descriptor's value on its header line. DOCK writes
/// `##########  <label>:  <value>`, so the value is the third token.
const VALUE_TOKEN: usize = 2;

/// Policy for a declared descriptor that matches no line of a segment.
///
/// The default fails the run naming the label and the molecule, instead of
/// silently shifting every later value of that column. `Blank` keeps the
/// row with an empty cell; `Drop` omits the molecule's row entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnMissing {
    #[default]
    Fail,
    Blank,
    Drop,
}

/// An ordered, pre-declared list of descriptor labels.
///
/// Labels match by substring against each line of a molecule's segment, the
/// way the DOCK header is actually grepped in practice; extraction order
/// follows declaration order, not line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorSet {
    labels: Vec<String>,
}

#[derive(Deserialize)]
struct DescriptorFile {
    labels: Vec<String>,
}

impl DescriptorSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The full descriptor header of a DOCK6 virtual-screen output, in the
    /// order DOCK writes it.
    pub fn dock6() -> Self {
        Self::new([
            "Name_DOCK",
            "From_List",
            "List_Rank",
            "Name_MOE",
            "Cluster_size",
            "TotalScore_(FPS+DCE)",
            "Continuous_Score",
            "Continuous_vdw_energy",
            "Internal_energy_repulsive",
            "Footprint_Similarity_Score",
            "FPS_vdw_fps",
            "FPS_es_fps",
            "FPS_hb_fps",
            "FPS_vdw_fp_numres",
            "FPS_es_fp_numres",
            "FPS_hb_fp_numres",
            "Num_H-bonds",
            "DOCK_rot_bonds",
            "Pharmacophore_Score",
            "Property_Volume_Score",
            "Tanimoto_Score",
            "Hungarian_Matching_Similarity_Score",
            "Descriptor_Score",
            "MOE_rot_bonds",
            "Molecular_weight",
            "Num_chiral_centers",
            "Lipinski_donors",
            "Lipinski_acceptors",
            "Lipinski_druglike",
            "Lipinski_violations",
            "SlogP",
            "Formal_charge",
            "logS",
            "Ligand_efficiency",
            "SMILES",
        ])
    }

    /// Parses a descriptor set from TOML of the form `labels = ["...", ...]`.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        let file: DescriptorFile = toml::from_str(text)?;
        Ok(Self { labels: file.labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    pub fn field_count(&self) -> usize {
        self.labels.len()
    }

    /// Position of `label` in the declared order.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }
}

/// Looks up one labeled value inside a segment.
///
/// Scans every line of the segment; when several lines carry the label, the
/// last match wins. Returns `Ok(None)` when no line matches, and a loud
/// parse error when a matching line has no value token.
pub fn label_value(
    stream: &LineStream,
    segment: Segment,
    label: &str,
) -> Result<Option<String>, Error> {
    let mut value = None;
    for (offset, line) in stream.segment_lines(segment).iter().enumerate() {
        if !line.contains(label) {
            continue;
        }
        let token = line.split_whitespace().nth(VALUE_TOKEN).ok_or_else(|| {
            Error::parse(
                segment.start + offset + 1,
                format!("header line for '{}' has no value token", label),
            )
        })?;
        value = Some(token.to_string());
    }
    Ok(value)
}

/// Extracts one molecule's metadata record: one value per declared label, in
/// declared order.
///
/// `molecule` is the 0-based ordinal used in error messages and matches the
/// row the record would occupy in tabular output. `Ok(None)` means the
/// molecule was dropped under [`OnMissing::Drop`].
pub fn extract_record(
    stream: &LineStream,
    segment: Segment,
    set: &DescriptorSet,
    molecule: usize,
    on_missing: OnMissing,
) -> Result<Option<Vec<String>>, Error> {
    let mut values = Vec::with_capacity(set.field_count());
    for label in set.labels() {
        match label_value(stream, segment, label)? {
            Some(value) => values.push(value),
            None => match on_missing {
                OnMissing::Fail => {
                    return Err(Error::MissingDescriptor {
                        label: label.clone(),
                        molecule,
                    });
                }
                OnMissing::Blank => values.push(String::new()),
                OnMissing::Drop => return Ok(None),
            },
        }
    }
    Ok(Some(values))
}
