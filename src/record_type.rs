use std::str::FromStr;

use num_derive::{FromPrimitive, ToPrimitive};

#[derive(FromPrimitive, ToPrimitive, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A = 1,
    Ns = 2,
    Md = 3,
    Mf = 4,
    Cname = 5,
    Soa = 6,
    Mb = 7,
    Mg = 8,
    Mr = 9,
    Null = 10,
    Wks = 11,
    Ptr = 12,
    Hinfo = 13,
    Minfo = 14,
    Mx = 15,
    Txt = 16,
    Aaaa = 28,
    Srv = 33,
    Any = 255,
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let type_ = match s.to_ascii_uppercase().as_str() {
            "A" => Self::A,
            "NS" => Self::Ns,
            "MD" => Self::Md,
            "MF" => Self::Mf,
            "CNAME" => Self::Cname,
            "SOA" => Self::Soa,
            "MB" => Self::Mb,
            "MG" => Self::Mg,
            "MR" => Self::Mr,
            "NULL" => Self::Null,
            "WKS" => Self::Wks,
            "PTR" => Self::Ptr,
            "HINFO" => Self::Hinfo,
            "MINFO" => Self::Minfo,
            "MX" => Self::Mx,
            "TXT" => Self::Txt,
            "AAAA" => Self::Aaaa,
            "SRV" => Self::Srv,
            "ANY" => Self::Any,
            other => return Err(format!("unknown record type: {other}")),
        };

        Ok(type_)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{FromPrimitive, ToPrimitive};

    use super::RecordType;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("aaaa".parse::<RecordType>(), Ok(RecordType::Aaaa));
        assert_eq!("MX".parse::<RecordType>(), Ok(RecordType::Mx));
        assert!("bogus".parse::<RecordType>().is_err());
    }

    #[test]
    fn converts_to_wire_values() {
        assert_eq!(RecordType::A.to_u16(), Some(1));
        assert_eq!(RecordType::Any.to_u16(), Some(255));
        assert_eq!(RecordType::from_u16(28), Some(RecordType::Aaaa));
        assert_eq!(RecordType::from_u16(17), None);
    }
}
