// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain model and validation rules.
//!
//! This module defines the registration record ("ficha") captured by the
//! form, the contact type choices, and the validation applied when a record
//! is saved: CPF check digits and the Brazilian mobile number shape.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TipoContato {
    Celular,
    Whatsapp,
    Email,
    Instagram,
    Facebook,
    Telegram,
}

impl TipoContato {
    pub(crate) const ALL: [TipoContato; 6] = [
        TipoContato::Celular,
        TipoContato::Whatsapp,
        TipoContato::Email,
        TipoContato::Instagram,
        TipoContato::Facebook,
        TipoContato::Telegram,
    ];

    /// The stored form of the choice.
    pub(crate) fn value(self) -> &'static str {
        match self {
            TipoContato::Celular => "celular",
            TipoContato::Whatsapp => "whatsapp",
            TipoContato::Email => "email",
            TipoContato::Instagram => "instagram",
            TipoContato::Facebook => "facebook",
            TipoContato::Telegram => "telegram",
        }
    }

    /// Whether contacts of this type are phone numbers (and therefore get
    /// digit storage and the mobile shape validation).
    pub(crate) fn is_telefone(self) -> bool {
        matches!(
            self,
            TipoContato::Celular | TipoContato::Whatsapp | TipoContato::Telegram
        )
    }

    /// The display form of the choice.
    pub(crate) fn label(self) -> &'static str {
        match self {
            TipoContato::Celular => "Celular",
            TipoContato::Whatsapp => "WhatsApp",
            TipoContato::Email => "Email",
            TipoContato::Instagram => "Instagram",
            TipoContato::Facebook => "Facebook",
            TipoContato::Telegram => "Telegram",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ValidationError {
    #[error("CPF deve ter 11 dígitos.")]
    CpfTamanho,

    #[error("CPF inválido.")]
    CpfInvalido,

    #[error(
        "Número de celular inválido. Deve estar no padrão brasileiro, \
         exemplos: +55 (DDD) 9XXXX-XXXX ou (DDD) 9XXXX-XXXX"
    )]
    CelularInvalido,
}

/// A registration record as captured by the form.
///
/// Document and contact fields hold the digits-only projection; `valor` is
/// kept exactly as typed and display-formatted at render time.
#[derive(Debug, Clone)]
pub(crate) struct Ficha {
    pub(crate) nome: String,
    pub(crate) cpf: String,
    pub(crate) cnpj: String,
    pub(crate) tipo: TipoContato,
    pub(crate) contato: String,
    pub(crate) valor: String,
    pub(crate) parcelas: String,
}

impl Ficha {
    /// Validates the record before it is saved.
    ///
    /// Empty optional fields are accepted; a CPF, when present, must carry
    /// valid check digits, and a mobile-type contact must have the Brazilian
    /// mobile shape.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if !self.cpf.is_empty() {
            validate_cpf(&self.cpf)?;
        }

        if self.tipo.is_telefone() && !self.contato.is_empty() && !is_celular(&self.contato) {
            return Err(ValidationError::CelularInvalido);
        }

        Ok(())
    }

    /// The partially hidden CPF used in listings: `***.456.***-01`.
    pub(crate) fn cpf_protegido(&self) -> String {
        if self.cpf.len() == 11 {
            format!("***.{}.***-{}", &self.cpf[3..6], &self.cpf[9..])
        } else {
            self.cpf.clone()
        }
    }
}

/// Checks a digits-only CPF against its two verifying digits.
pub(crate) fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.len() != 11 || !cpf.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::CpfTamanho);
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    // A repeated digit sequence satisfies the checksum but is not a valid
    // document.
    if digits.iter().all(|d| *d == digits[0]) {
        return Err(ValidationError::CpfInvalido);
    }

    for position in [9usize, 10] {
        let sum: u32 = digits
            .iter()
            .take(position)
            .enumerate()
            .map(|(i, d)| (position as u32 + 1 - i as u32) * d)
            .sum();
        let verifying_digit = (sum * 10 % 11) % 10;

        if verifying_digit != digits[position] {
            return Err(ValidationError::CpfInvalido);
        }
    }

    Ok(())
}

/// Whether a digits-only contact matches the Brazilian mobile shape:
/// an optional `55` country code, a two digit area code, a leading `9` and
/// eight subscriber digits.
pub(crate) fn is_celular(digits: &str) -> bool {
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match digits.len() {
        11 => digits.as_bytes()[2] == b'9',
        13 => digits.starts_with("55") && digits.as_bytes()[4] == b'9',
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ficha() -> Ficha {
        Ficha {
            nome: "Maria".into(),
            cpf: String::new(),
            cnpj: String::new(),
            tipo: TipoContato::Celular,
            contato: String::new(),
            valor: String::new(),
            parcelas: String::new(),
        }
    }

    #[test]
    fn accepts_a_valid_cpf() {
        assert_eq!(validate_cpf("11144477735"), Ok(()));
        assert_eq!(validate_cpf("52998224725"), Ok(()));
    }

    #[test]
    fn rejects_wrong_check_digits() {
        assert_eq!(validate_cpf("11144477734"), Err(ValidationError::CpfInvalido));
        assert_eq!(validate_cpf("11144477745"), Err(ValidationError::CpfInvalido));
    }

    #[test]
    fn rejects_repeated_digit_sequences() {
        assert_eq!(validate_cpf("11111111111"), Err(ValidationError::CpfInvalido));
        assert_eq!(validate_cpf("00000000000"), Err(ValidationError::CpfInvalido));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(validate_cpf(""), Err(ValidationError::CpfTamanho));
        assert_eq!(validate_cpf("123"), Err(ValidationError::CpfTamanho));
        assert_eq!(validate_cpf("111444777350"), Err(ValidationError::CpfTamanho));
    }

    #[test]
    fn celular_shapes() {
        assert!(is_celular("11987654321"));
        assert!(is_celular("5511987654321"));

        // Landline: no leading 9 on the subscriber number.
        assert!(!is_celular("1187654321"));
        assert!(!is_celular("11887654321"));
        // Wrong country code.
        assert!(!is_celular("5411987654321"));
        assert!(!is_celular(""));
    }

    #[test]
    fn validate_accepts_empty_optional_fields() {
        assert_eq!(ficha().validate(), Ok(()));
    }

    #[test]
    fn validate_checks_cpf_when_present() {
        let mut f = ficha();
        f.cpf = "11144477735".into();
        assert_eq!(f.validate(), Ok(()));

        f.cpf = "11144477734".into();
        assert_eq!(f.validate(), Err(ValidationError::CpfInvalido));
    }

    #[test]
    fn validate_checks_mobile_contact_only_for_mobile_types() {
        let mut f = ficha();
        f.contato = "1187654321".into();
        assert_eq!(f.validate(), Err(ValidationError::CelularInvalido));

        f.tipo = TipoContato::Email;
        assert_eq!(f.validate(), Ok(()));
    }

    #[test]
    fn cpf_protegido_hides_the_outer_groups() {
        let mut f = ficha();
        f.cpf = "11144477735".into();
        assert_eq!(f.cpf_protegido(), "***.444.***-35");

        f.cpf = "123".into();
        assert_eq!(f.cpf_protegido(), "123");
    }
}
