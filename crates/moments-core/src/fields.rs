//! Declarative description of the inputs shown on each step.

/// Supported input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    /// Read-only text written through the date picker.
    Date,
    /// Closed set of `(value, label)` options.
    Choice(&'static [(&'static str, &'static str)]),
}

/// Declarative description of a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub const fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Whether `value` is acceptable for a choice field (blank means "not chosen").
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            FieldKind::Choice(options) => {
                value.is_empty() || options.iter().any(|(token, _)| *token == value)
            }
            _ => true,
        }
    }
}

pub const GENDER_OPTIONS: &[(&str, &str)] = &[("male", "Male"), ("female", "Female")];

const STEP1_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("fullName", "Full Name", FieldKind::Text)
        .with_required()
        .with_placeholder("e.g, John Arthur Doe"),
    FieldDescriptor::new("preferredName", "Preferred Name", FieldKind::Text)
        .with_placeholder("Optional nickname (e.g, Jack)"),
    FieldDescriptor::new("gender", "Gender", FieldKind::Choice(GENDER_OPTIONS))
        .with_required()
        .with_placeholder("Select gender from the options"),
    FieldDescriptor::new("dateBirth", "Date of Birth", FieldKind::Date)
        .with_required()
        .with_placeholder("dd/mm/yyyy"),
    FieldDescriptor::new("datePassing", "Date of Passing", FieldKind::Date)
        .with_required()
        .with_placeholder("dd/mm/yyyy"),
    FieldDescriptor::new("placeBirth", "Place of Birth", FieldKind::Text)
        .with_required()
        .with_placeholder("e.g, Houston, Texas"),
    FieldDescriptor::new("placePassing", "Place of Passing", FieldKind::Text)
        .with_required()
        .with_placeholder("e.g, at home in Chicago, IL"),
    FieldDescriptor::new("causePassing", "Cause of Passing (Optional)", FieldKind::Text)
        .with_placeholder("e.g., After a long battle with cancer"),
];

const STEP2_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new(
        "description",
        "Describe them in one sentence",
        FieldKind::TextArea,
    )
    .with_required()
    .with_placeholder(
        "She was a devoted mom and teacher who loved music and making people smile.",
    ),
    FieldDescriptor::new("motto", "Favorite Saying or Motto", FieldKind::Text)
        .with_placeholder("eg, Live and let live"),
];

const STEP3_FIELDS: &[FieldDescriptor] = &[FieldDescriptor::new(
    "familyActivities",
    "Family Activities & Traditions",
    FieldKind::TextArea,
)
.with_placeholder("e.g., Sunday pancake breakfasts")];

/// Fields rendered on `step`. Steps without a form yield an empty slice.
pub fn step_fields(step: u8) -> &'static [FieldDescriptor] {
    match step {
        1 => STEP1_FIELDS,
        2 => STEP2_FIELDS,
        3 => STEP3_FIELDS,
        _ => &[],
    }
}

pub fn find_field(step: u8, key: &str) -> Option<&'static FieldDescriptor> {
    step_fields(step).iter().find(|field| field.key == key)
}
