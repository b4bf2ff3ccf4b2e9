use serde::{Deserialize, Serialize};

/// One row of the gate log: a visitor or vehicle passing through.
///
/// Serialized with camelCase keys and `null` for unset times, the same layout
/// the `allLogs` document has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entry_time: Option<String>,
    #[serde(default)]
    pub exit_time: Option<String>,
    /// Role or affiliation of the visitor.
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub vehicle_type: String,
    #[serde(default)]
    pub notes: String,
}

impl Entry {
    /// An empty row, ready to be filled in.
    pub fn blank(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
            entry_time: None,
            exit_time: None,
            capacity: String::new(),
            vehicle_type: String::new(),
            notes: String::new(),
        }
    }

    /// True when the name holds something other than whitespace.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// An empty string counts as unset, as older documents sometimes hold one.
    pub fn has_entry_time(&self) -> bool {
        self.entry_time.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_exit_time(&self) -> bool {
        self.exit_time.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// True when no text field and no time has been filled in.
    pub fn is_blank(&self) -> bool {
        !self.has_name()
            && !self.has_entry_time()
            && !self.has_exit_time()
            && self.capacity.trim().is_empty()
            && self.vehicle_type.trim().is_empty()
            && self.notes.trim().is_empty()
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Name => &self.name,
            EntryField::Capacity => &self.capacity,
            EntryField::VehicleType => &self.vehicle_type,
            EntryField::Notes => &self.notes,
        }
    }

    /// Copy of this entry with one text field replaced.
    pub fn with_field(&self, field: EntryField, value: &str) -> Self {
        let mut next = self.clone();
        let slot = match field {
            EntryField::Name => &mut next.name,
            EntryField::Capacity => &mut next.capacity,
            EntryField::VehicleType => &mut next.vehicle_type,
            EntryField::Notes => &mut next.notes,
        };
        *slot = value.to_string();
        next
    }
}

/// Editable text columns of an [`Entry`]. Times are never edited as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Capacity,
    VehicleType,
    Notes,
}

impl EntryField {
    /// Parse a column name typed on the command line.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "capacity" | "role" => Some(Self::Capacity),
            "vehicle" | "vehicletype" | "vehicle_type" | "vehicle-type" => Some(Self::VehicleType),
            "notes" | "note" => Some(Self::Notes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Name => "name",
            EntryField::Capacity => "capacity",
            EntryField::VehicleType => "vehicleType",
            EntryField::Notes => "notes",
        }
    }
}

/// Which time cell a stamp goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    Entry,
    Exit,
}

impl TimeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeKind::Entry => "entry",
            TimeKind::Exit => "exit",
        }
    }
}
