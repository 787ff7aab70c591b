/// Revision of [`CANONICAL_SPECIALISTS`]; bump whenever the table changes.
pub const SPECIALIST_TABLE_VERSION: u32 = 1;

pub const MAX_MATCHED_SPECIALISTS: usize = 5;

/// Specialist titles recognized in recommendation text, in preference order.
///
/// "Orthopedic Surgeon" and "Pediatric Surgeon" each appear twice. Both copies match, so a
/// single mention of either title consumes two of the [`MAX_MATCHED_SPECIALISTS`] slots.
pub const CANONICAL_SPECIALISTS: [&str; 76] = [
    "Allergist / Immunologist",
    "Endocrinologist",
    "Gastroenterologist",
    "Hematologist",
    "Infectious Disease Specialist",
    "Nephrologist",
    "Pulmonologist",
    "Rheumatologist",
    "Cardiologist",
    "General Physician / Internist",
    "General Surgeon",
    "Cardiothoracic Surgeon",
    "Neurosurgeon",
    "Orthopedic Surgeon",
    "Plastic Surgeon",
    "Pediatric Surgeon",
    "Urologist",
    "Vascular Surgeon",
    "Colorectal Surgeon",
    "ENT Surgeon (Otolaryngologist)",
    "Gynecologist",
    "Obstetrician",
    "Reproductive Endocrinologist / Fertility Specialist",
    "Maternal-Fetal Medicine Specialist",
    "Pediatrician",
    "Pediatric Cardiologist",
    "Pediatric Neurologist",
    "Pediatric Surgeon",
    "Pediatric Endocrinologist",
    "Neurologist",
    "Psychiatrist",
    "Child & Adolescent Psychiatrist",
    "Geriatric Psychiatrist",
    "Neuropsychiatrist",
    "Dermatologist",
    "Mohs Surgeon",
    "Cosmetic Dermatologist",
    "Pediatric Dermatologist",
    "Ophthalmologist",
    "Retina Specialist",
    "Cornea Specialist",
    "Pediatric Ophthalmologist",
    "Glaucoma Specialist",
    "Otolaryngologist",
    "Head & Neck Surgeon",
    "Audiologist",
    "Orthopedic Surgeon",
    "Sports Medicine Specialist",
    "Physical Medicine & Rehabilitation Specialist",
    "Interventional Cardiologist",
    "Electrophysiologist",
    "Cardiac Surgeon",
    "Medical Oncologist",
    "Surgical Oncologist",
    "Radiation Oncologist",
    "Pediatric Oncologist",
    "Hemato-Oncologist",
    "Emergency Medicine Specialist",
    "Intensivist / Critical Care Specialist",
    "Trauma Surgeon",
    "Oral & Maxillofacial Surgeon",
    "Orthodontist",
    "Endodontist",
    "Periodontist",
    "Pediatric Dentist",
    "Dietitian / Nutritionist",
    "Integrative Medicine Specialist",
    "Anesthesiologist",
    "Pain Medicine Specialist",
    "Geriatrician",
    "Occupational Medicine Specialist",
    "Sleep Medicine Specialist",
    "Geneticist / Medical Geneticist",
    "Sports Medicine Physician",
    "Palliative Care Specialist",
    "Addiction Medicine Specialist",
];

const CANONICAL_TABLE: &[&str] = &CANONICAL_SPECIALISTS;

/// Keyword-containment matcher over a fixed specialist table.
///
/// A title matches when its lower-cased text occurs anywhere in the lower-cased
/// recommendations, so overlapping titles ("Urologist" inside "Neurologist") both match.
#[derive(Debug, Clone, Copy)]
pub struct SpecialistMatcher {
    table: &'static [&'static str],
    cap: usize,
}

impl Default for SpecialistMatcher {
    fn default() -> Self {
        Self::canonical()
    }
}

impl SpecialistMatcher {
    pub const fn canonical() -> Self {
        Self::with_table(CANONICAL_TABLE)
    }

    pub const fn with_table(table: &'static [&'static str]) -> Self {
        Self {
            table,
            cap: MAX_MATCHED_SPECIALISTS,
        }
    }

    pub fn table(&self) -> &'static [&'static str] {
        self.table
    }

    /// Titles mentioned in the recommendations, in table order, at most five.
    pub fn match_recommendations(&self, recommendations: &[String]) -> Vec<String> {
        let haystack = recommendations.join(" ").to_lowercase();

        self.table
            .iter()
            .filter(|title| haystack.contains(&title.to_lowercase()))
            .take(self.cap)
            .map(|title| title.to_string())
            .collect()
    }
}
