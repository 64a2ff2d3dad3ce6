//! Declarative per-entity validation.
//!
//! Validation is a pure, synchronous whole-pass over a draft: every violated
//! rule lands in [`FieldErrors`] keyed by dotted field path (so nested
//! address fields can be reported individually), and submission is the
//! caller's decision on `Err`. Nothing here touches collections.

use std::collections::BTreeMap;

use crate::domain::broker::Broker;
use crate::domain::owner::Owner;
use crate::domain::property::Property;

/// Field-path → message mapping. Ordered so error listings are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(path.into(), message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.errors.get(path).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Draft acceptance check. `Ok(())` means the draft may be committed;
/// `Err` carries every violation found in one pass (never fail-fast).
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Permissive well-formedness check: one `@`, a non-empty local part and a
/// dotted domain. Deliberately not an RFC parser.
pub fn email_is_valid(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.contains(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|part| !part.is_empty())
}

fn require(errors: &mut FieldErrors, path: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.insert(path, message);
    }
}

impl Validate for Property {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title, "Título é obrigatório");
        require(
            &mut errors,
            "description",
            &self.description,
            "Descrição é obrigatória",
        );
        if self.price < 0.0 {
            errors.insert("price", "Preço deve ser positivo");
        }
        require(
            &mut errors,
            "address.street",
            &self.address.street,
            "Rua é obrigatória",
        );
        require(
            &mut errors,
            "address.city",
            &self.address.city,
            "Cidade é obrigatória",
        );
        require(
            &mut errors,
            "address.state",
            &self.address.state,
            "Estado é obrigatório",
        );
        require(
            &mut errors,
            "address.zipCode",
            &self.address.zip_code,
            "CEP é obrigatório",
        );
        if self.area < 0.0 {
            errors.insert("area", "Área deve ser positiva");
        }
        require(
            &mut errors,
            "brokerId",
            &self.broker_id,
            "Corretor é obrigatório",
        );
        require(
            &mut errors,
            "ownerId",
            &self.owner_id,
            "Proprietário é obrigatório",
        );
        errors.into_result()
    }
}

impl Validate for Broker {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Nome é obrigatório");
        if !email_is_valid(&self.email) {
            errors.insert("email", "Email inválido");
        }
        require(&mut errors, "phone", &self.phone, "Telefone é obrigatório");
        // whatsapp is unconstrained.
        require(
            &mut errors,
            "licenseNumber",
            &self.license_number,
            "Número da licença é obrigatório",
        );
        errors.into_result()
    }
}

impl Validate for Owner {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Nome é obrigatório");
        if !email_is_valid(&self.email) {
            errors.insert("email", "Email inválido");
        }
        require(&mut errors, "phone", &self.phone, "Telefone é obrigatório");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::{Address, PropertyCategory, PropertyType};
    use crate::seed;

    fn valid_property() -> Property {
        Property {
            id: String::new(),
            title: "Cobertura com vista".into(),
            description: "Duplex reformado.".into(),
            price: 890_000.0,
            property_type: PropertyType::Apartment,
            category: PropertyCategory::Urban,
            address: Address {
                street: "Rua Augusta, 900".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                zip_code: "01304-001".into(),
            },
            bedrooms: 3,
            bathrooms: 2,
            area: 140.0,
            images: Vec::new(),
            broker_id: "broker-1".into(),
            owner_id: "owner-1".into(),
            features: vec!["Varanda".into()],
            is_featured: true,
        }
    }

    #[test]
    fn valid_property_passes() {
        assert!(valid_property().validate().is_ok());
    }

    #[test]
    fn property_violations_are_collected_in_one_pass() {
        let draft = Property {
            title: "  ".into(),
            description: String::new(),
            price: -1.0,
            broker_id: String::new(),
            ..valid_property()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Título é obrigatório"));
        assert_eq!(errors.get("description"), Some("Descrição é obrigatória"));
        assert_eq!(errors.get("price"), Some("Preço deve ser positivo"));
        assert_eq!(errors.get("brokerId"), Some("Corretor é obrigatório"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn nested_address_fields_report_dotted_paths() {
        let draft = Property {
            address: Address::default(),
            ..valid_property()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("address.street"), Some("Rua é obrigatória"));
        assert_eq!(errors.get("address.city"), Some("Cidade é obrigatória"));
        assert_eq!(errors.get("address.state"), Some("Estado é obrigatório"));
        assert_eq!(errors.get("address.zipCode"), Some("CEP é obrigatório"));
    }

    #[test]
    fn broker_with_bad_email_is_rejected() {
        let mut broker = seed::brokers()[0].clone();
        broker.email = "not-an-email".into();
        let errors = broker.validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email inválido"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn broker_whatsapp_is_unconstrained() {
        let mut broker = seed::brokers()[0].clone();
        broker.whatsapp = None;
        assert!(broker.validate().is_ok());
        broker.whatsapp = Some("qualquer coisa".into());
        assert!(broker.validate().is_ok());
    }

    #[test]
    fn owner_requires_name_email_and_phone() {
        let owner = Owner::default();
        let errors = owner.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Nome é obrigatório"));
        assert_eq!(errors.get("email"), Some("Email inválido"));
        assert_eq!(errors.get("phone"), Some("Telefone é obrigatório"));
    }

    #[test]
    fn email_check_accepts_plausible_and_rejects_malformed() {
        assert!(email_is_valid("carlos.f@imoveis.com"));
        assert!(email_is_valid("a@b.co"));
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("not-an-email"));
        assert!(!email_is_valid("@imoveis.com"));
        assert!(!email_is_valid("carlos@"));
        assert!(!email_is_valid("carlos@imoveis"));
        assert!(!email_is_valid("carlos@imoveis."));
        assert!(!email_is_valid("ca rlos@imoveis.com"));
        assert!(!email_is_valid("carlos@@imoveis.com"));
    }
}
