//! Form field identifiers and the form value object

use crate::icons::Icon;

/// One named, independently editable datum of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Position,
    Description,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Position,
        Field::Description,
    ];

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::Position => "Position",
            Self::Description => "Description",
        }
    }

    /// Hint shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "e.g. John Doe",
            Self::Email => "e.g. Johndoe@gmail.com",
            Self::Phone => "e.g. (220) 222 -20002",
            Self::Position => "e.g. Junior Front end Developer",
            Self::Description => "e.g. Work experiences",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Self::Name => Icon::User,
            Self::Email => Icon::Mail,
            Self::Phone => Icon::Phone,
            Self::Position => Icon::Position,
            Self::Description => Icon::Description,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Description)
    }

    /// Whether the validator has rules for this field
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Phone)
    }

    /// Position of the field in display order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Position => 3,
            Self::Description => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }
}

/// Current values of the five form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub description: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Position => &self.position,
            Field::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Position => &mut self.position,
            Field::Description => &mut self.description,
        }
    }

    /// Value to display or export, falling back to the sample resume
    /// when the field is empty
    pub fn display_value(&self, field: Field) -> &str {
        let value = self.get(field);
        if value.is_empty() {
            fallback(field)
        } else {
            value
        }
    }
}

/// Sample value used for an empty field in the preview and the PDF
pub fn fallback(field: Field) -> &'static str {
    match field {
        Field::Name => "John Doe",
        Field::Email => "Johndoe@gmail.com",
        Field::Phone => "+222 223 2221",
        Field::Position => "Junior Frontend Developer",
        Field::Description => {
            "Frontend Developer with 3 years of experience in creating responsive and \
             user-friendly web interfaces using HTML, CSS, and JavaScript. Skilled in modern \
             frameworks like React and committed to delivering clean, efficient code."
        }
    }
}
