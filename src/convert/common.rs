use crate::identifier::go_quote;
use crate::spec;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedOptionalRequired(Option<spec::ComputedOptionalRequired>);

impl ComputedOptionalRequired {
    pub fn new(value: Option<spec::ComputedOptionalRequired>) -> Self {
        Self(value)
    }

    pub fn schema(&self) -> String {
        use spec::ComputedOptionalRequired::*;
        match self.0 {
            Some(Computed) => "Computed: true,\n".to_string(),
            Some(ComputedOptional) => "Computed: true,\nOptional: true,\n".to_string(),
            Some(Optional) => "Optional: true,\n".to_string(),
            Some(Required) => "Required: true,\n".to_string(),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sensitive(bool);

impl Sensitive {
    pub fn new(value: Option<bool>) -> Self {
        Self(value.unwrap_or(false))
    }

    pub fn schema(&self) -> String {
        if self.0 {
            "Sensitive: true,\n".to_string()
        } else {
            String::new()
        }
    }
}

/// Emitted as both `Description` and `MarkdownDescription`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description(Option<String>);

impl Description {
    pub fn new(value: Option<&String>) -> Self {
        Self(value.cloned())
    }

    pub fn schema(&self) -> String {
        match &self.0 {
            Some(d) => {
                let quoted = go_quote(d);
                format!("Description: {},\nMarkdownDescription: {},\n", quoted, quoted)
            }
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprecationMessage(Option<String>);

impl DeprecationMessage {
    pub fn new(value: Option<&String>) -> Self {
        Self(value.cloned())
    }

    pub fn schema(&self) -> String {
        match &self.0 {
            Some(m) => format!("DeprecationMessage: {},\n", go_quote(m)),
            None => String::new(),
        }
    }
}

/// The fields that sit between the custom type and the plan modifiers of
/// every attribute kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeFields {
    pub computed_optional_required: ComputedOptionalRequired,
    pub sensitive: Sensitive,
    pub description: Description,
    pub deprecation_message: DeprecationMessage,
}

impl AttributeFields {
    pub fn new(
        computed_optional_required: Option<spec::ComputedOptionalRequired>,
        sensitive: Option<bool>,
        description: Option<&String>,
        deprecation_message: Option<&String>,
    ) -> Self {
        Self {
            computed_optional_required: ComputedOptionalRequired::new(computed_optional_required),
            sensitive: Sensitive::new(sensitive),
            description: Description::new(description),
            deprecation_message: DeprecationMessage::new(deprecation_message),
        }
    }

    pub fn schema(&self) -> String {
        let mut s = self.computed_optional_required.schema();
        s.push_str(&self.sensitive.schema());
        s.push_str(&self.description.schema());
        s.push_str(&self.deprecation_message.schema());
        s
    }
}

/// Blocks carry no computed/optional/required or sensitivity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockFields {
    pub description: Description,
    pub deprecation_message: DeprecationMessage,
}

impl BlockFields {
    pub fn new(description: Option<&String>, deprecation_message: Option<&String>) -> Self {
        Self {
            description: Description::new(description),
            deprecation_message: DeprecationMessage::new(deprecation_message),
        }
    }

    pub fn schema(&self) -> String {
        let mut s = self.description.schema();
        s.push_str(&self.deprecation_message.schema());
        s
    }
}
