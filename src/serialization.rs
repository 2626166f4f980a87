use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::ParsedName;

// The serialized record keeps the flat five-field shape, with empty strings
// standing in for parts that were not detected.
impl Serialize for ParsedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("ParsedName", 5)?;
        record.serialize_field("salutation", self.salutation().unwrap_or(""))?;
        record.serialize_field("first_name", self.given_name().unwrap_or(""))?;
        record.serialize_field("initials", self.middle_initials().unwrap_or(""))?;
        record.serialize_field("last_name", self.surname().unwrap_or(""))?;
        record.serialize_field("suffix", self.suffix().unwrap_or(""))?;
        record.end()
    }
}

#[cfg(test)]
mod tests {
    use super::ParsedName;

    #[test]
    fn five_field_record() {
        let name = ParsedName::parse("Mr. John Smith");
        let json = serde_json::to_value(&name).unwrap();

        assert_eq!("Mr.", json["salutation"]);
        assert_eq!("John", json["first_name"]);
        assert_eq!("", json["initials"]);
        assert_eq!("Smith", json["last_name"]);
        assert_eq!("", json["suffix"]);
    }

    #[test]
    fn degenerate_record() {
        let json = serde_json::to_value(ParsedName::parse("")).unwrap();
        assert_eq!("", json["first_name"]);
        assert_eq!("", json["last_name"]);
    }
}
