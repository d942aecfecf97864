use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use telnet_subneg::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

const OPTIONS: &[u8] = &[0, 24, 31, 39, 150, 255];
const CONTENTS: &[&[u8]] = &[b"", b"\x00", b"VT100", b"VT220", b"VT1000", b"\x00P\x00\x18"];

#[test]
fn equality_matches_option_and_content() {
    for &o1 in OPTIONS {
        for &c1 in CONTENTS {
            for &o2 in OPTIONS {
                for &c2 in CONTENTS {
                    let a = Subnegotiation::new(o1, c1);
                    let b = Subnegotiation::new(o2, c2);
                    assert_eq!(a == b, o1 == o2 && c1 == c2, "{} vs {}", a, b);
                }
            }
        }
    }
}

#[test]
fn equality_is_an_equivalence() {
    let values: Vec<Vec<u8>> = CONTENTS.iter().map(|c| c.to_vec()).collect();
    let copies: Vec<Vec<u8>> = CONTENTS.iter().map(|c| c.to_vec()).collect();
    let mut all = Vec::new();
    for &o in OPTIONS {
        for c in values.iter().chain(copies.iter()) {
            all.push(Subnegotiation::new(o, c));
        }
    }

    for a in &all {
        assert_eq!(a, a);
        for b in &all {
            assert_eq!(a == b, b == a);
            for c in &all {
                if a == b && b == c {
                    assert_eq!(a, c);
                }
            }
        }
    }
}

#[test]
fn content_matches_construction() {
    for &c in CONTENTS {
        let sb = Subnegotiation::new(24u8, c);
        assert_eq!(sb.content().len(), c.len());
        assert_eq!(sb.content(), c);
    }
}

#[test]
fn empty_content() {
    let empty = Subnegotiation::new(KnownOpt::NAWS, &[]);
    assert!(empty.content().is_empty());
    assert_eq!(empty, Subnegotiation::new(31u8, b""));
    assert_ne!(empty, Subnegotiation::new(31u8, b"\x00"));
    assert_ne!(empty, Subnegotiation::new(24u8, b""));
}

#[test]
fn terminal_type_scenario() {
    let first = String::from("VT100").into_bytes();
    let second = String::from("VT100").into_bytes();
    assert_ne!(first.as_ptr(), second.as_ptr());

    let sb = Subnegotiation::new(KnownOpt::TERMINAL_TYPE, &first);
    assert_eq!(sb, Subnegotiation::new(24u8, &second));
    assert_ne!(sb, Subnegotiation::new(24u8, b"VT220"));
    assert_ne!(sb, Subnegotiation::new(KnownOpt::NAWS, b"VT100"));
}

#[test]
fn rendering_is_deterministic_and_complete() {
    for &o in OPTIONS {
        for &c in CONTENTS {
            let sb = Subnegotiation::new(o, c);
            let rendered = sb.to_string();
            assert_eq!(rendered, sb.to_string());
            assert!(rendered.contains(&o.to_string()), "{}", rendered);
            assert_eq!(format!("{:?}", sb), format!("{:?}", sb));
        }
    }

    let rendered = Subnegotiation::new(24u8, b"VT100").to_string();
    assert!(rendered.contains("TERMINAL_TYPE"));
    assert!(rendered.contains("VT100"));
}

#[test]
fn hashing_agrees_with_equality() {
    let buf = b"VT100".to_vec();
    let a = Subnegotiation::new(24u8, b"VT100");
    let b = Subnegotiation::from_parts(Opt::Unknown(24), &buf);
    assert_eq!(hash_of(&a), hash_of(&b));

    let set: HashSet<Subnegotiation<'_>> = OPTIONS
        .iter()
        .flat_map(|&o| CONTENTS.iter().map(move |&c| Subnegotiation::new(o, c)))
        .chain(std::iter::once(b))
        .collect();
    assert_eq!(set.len(), OPTIONS.len() * CONTENTS.len());
    assert!(set.contains(&a));
}

#[test]
fn values_are_shareable() {
    fn assert_send_sync_copy<T: Send + Sync + Copy>() {}
    assert_send_sync_copy::<Subnegotiation<'static>>();
}

#[test]
fn option_classification() -> anyhow::Result<()> {
    init_tracing();
    let sb = Subnegotiation::new(39u8, b"\x01");
    assert_eq!(KnownOpt::try_from(sb.option())?, KnownOpt::NEW_ENVIRONMENT);

    let unknown = Subnegotiation::new(150u8, b"\x01");
    assert_eq!(unknown.option().known(), None);
    let err = KnownOpt::try_from(unknown.option()).unwrap_err();
    assert_eq!(err, Error::UnrecognizedOption(150));
    Ok(())
}

#[cfg(feature = "bytes")]
mod owned {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn outlives_the_decode_buffer() {
        init_tracing();
        let owned = {
            let mut buf = b"\x00VT100".to_vec();
            let owned = Subnegotiation::new(24u8, &buf).to_owned_content();
            buf.clear();
            owned
        };
        assert_eq!(owned, Subnegotiation::new(24u8, b"\x00VT100"));
        assert_eq!(owned.to_string(), "SB TERMINAL_TYPE(24) \"\\x00VT100\"");
    }

    #[test]
    fn hashes_like_the_borrowed_form() {
        let sb = Subnegotiation::new(KnownOpt::NAWS, &[0, 80, 0, 24]);
        let owned = OwnedSubnegotiation::from(sb);
        assert_eq!(hash_of(&sb), hash_of(&owned));
        assert_eq!(owned, OwnedSubnegotiation::new(31u8, vec![0u8, 80, 0, 24]));
        assert_ne!(owned, OwnedSubnegotiation::new(31u8, Bytes::new()));
        assert_eq!(Subnegotiation::from(&owned), sb);
    }
}
