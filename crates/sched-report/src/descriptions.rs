//! Plain-English study-type descriptions.
//!
//! Lookup tables are immutable configuration: scanned in declared order
//! with first-match-wins, never mutated during a run.

/// Hospital abbreviations as they appear inside study-type labels.
pub const HOSPITALS: &[(&str, &str)] = &[
    ("CPMC", "California Pacific Medical Center"),
    ("Allen", "Allen Hospital"),
    ("NYPLH", "NewYork-Presbyterian Lower Manhattan Hospital"),
    ("CHONY", "Children's Hospital of New York"),
];

#[derive(Debug, Clone, Copy)]
pub struct Modality {
    pub code: &'static str,
    pub name: &'static str,
    pub long_name: &'static str,
    pub description: &'static str,
    /// Plural form used in sentences ("CT scans at ...").
    pub verb: &'static str,
}

pub const MODALITIES: &[Modality] = &[
    Modality {
        code: "CT",
        name: "CT scan",
        long_name: "Computed Tomography",
        description: "detailed cross-sectional X-ray imaging",
        verb: "CT scans",
    },
    Modality {
        code: "MRI",
        name: "MRI scan",
        long_name: "Magnetic Resonance Imaging",
        description: "soft tissue visualization using magnetic fields",
        verb: "MRI scans",
    },
    Modality {
        code: "MR",
        name: "MRI scan",
        long_name: "Magnetic Resonance Imaging",
        description: "soft tissue visualization using magnetic fields",
        verb: "MRI scans",
    },
    Modality {
        code: "DX",
        name: "X-ray",
        long_name: "Radiography",
        description: "standard X-ray imaging",
        verb: "X-rays",
    },
    Modality {
        code: "US",
        name: "Ultrasound",
        long_name: "Ultrasonography",
        description: "real-time imaging using sound waves",
        verb: "ultrasound scans",
    },
    Modality {
        code: "NM",
        name: "Nuclear Medicine scan",
        long_name: "Nuclear Medicine",
        description: "functional imaging using radioactive tracers",
        verb: "nuclear medicine scans",
    },
    Modality {
        code: "PET",
        name: "PET scan",
        long_name: "Positron Emission Tomography",
        description: "metabolic imaging using radioactive tracers",
        verb: "PET scans",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct StudyArea {
    pub code: &'static str,
    pub name: &'static str,
    pub long_name: &'static str,
    pub description: &'static str,
}

pub const STUDY_AREAS: &[StudyArea] = &[
    StudyArea {
        code: "Chest/Abd",
        name: "Chest and abdomen",
        long_name: "Thoracic and abdominal",
        description: "chest, lungs, heart, and abdominal organs",
    },
    StudyArea {
        code: "Neuro",
        name: "Brain and spine",
        long_name: "Neurological",
        description: "head, brain, spine, and nervous system",
    },
    StudyArea {
        code: "Body",
        name: "Body",
        long_name: "Body imaging",
        description: "chest, abdomen, pelvis, and internal organs",
    },
    StudyArea {
        code: "Chest",
        name: "Chest",
        long_name: "Thoracic",
        description: "chest, lungs, and heart",
    },
    StudyArea {
        code: "Bone",
        name: "Bone and skeletal",
        long_name: "Musculoskeletal",
        description: "bones, joints, and skeletal structure",
    },
];

/// The parts of a study-type label the lookup tables recognise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParsedStudyType {
    pub hospital: Option<(&'static str, &'static str)>,
    pub modality: Option<Modality>,
    pub area: Option<StudyArea>,
}

pub fn parse_study_type(label: &str) -> ParsedStudyType {
    let upper = label.to_uppercase();
    ParsedStudyType {
        hospital: HOSPITALS
            .iter()
            .find(|(code, _)| label.contains(code))
            .copied(),
        modality: MODALITIES
            .iter()
            .find(|modality| upper.contains(modality.code))
            .copied(),
        area: STUDY_AREAS
            .iter()
            .find(|area| label.contains(area.code))
            .copied(),
    }
}

/// How much detail a description carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    /// "Brain and spine CT scans at CPMC"
    Short,
    /// "Brain and spine CT scans at California Pacific Medical Center"
    Medium,
    /// Medium plus long modality name and anatomy detail.
    Long,
    /// "CT scans of your brain and spine at ..."
    PatientFriendly,
}

/// Render a study-type label as plain English.
pub fn describe(label: &str, format: DescriptionFormat) -> String {
    let parsed = parse_study_type(label);
    let hospital_name = parsed.hospital.map_or("Unknown Hospital", |(_, name)| name);
    let verb = parsed.modality.map_or("imaging studies", |m| m.verb);
    let area_name = parsed.area.map_or("General", |a| a.name);

    match format {
        DescriptionFormat::Short => {
            let site = parsed.hospital.map_or(hospital_name, |(code, _)| code);
            format!("{area_name} {verb} at {site}")
        }
        DescriptionFormat::Medium => format!("{area_name} {verb} at {hospital_name}"),
        DescriptionFormat::Long => {
            let long_name = parsed.modality.map_or("", |m| m.long_name);
            let modality_desc = parsed.modality.map_or("imaging", |m| m.description);
            let area_desc = parsed.area.map_or(area_name, |a| a.description);
            format!(
                "{area_name} {verb} ({long_name}) at {hospital_name} - {modality_desc} of {area_desc}"
            )
        }
        DescriptionFormat::PatientFriendly => {
            let name = parsed.modality.map_or("imaging study", |m| m.name);
            format!(
                "{name}s of your {} at {hospital_name}",
                area_name.to_lowercase()
            )
        }
    }
}
