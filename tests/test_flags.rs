use triple2clangd::{FeatureFlags, FlagSet, WIDE_VECTOR_FLAG, parse_target_triple, resolve_flags};

fn resolve(triple: &str, wide_vector: bool, force_cxx: bool) -> FlagSet {
    let target = parse_target_triple(triple).unwrap();
    resolve_flags(
        &target,
        FeatureFlags {
            wide_vector,
            force_cxx,
        },
    )
}

fn defines(flags: &[String]) -> Vec<&str> {
    flags
        .iter()
        .filter_map(|f| f.strip_prefix("-D"))
        .collect()
}

const COMMON: &[&str] = &[
    "NDEBUG",
    "_WINDOWS",
    "NOMINMAX",
    "WIN32_LEAN_AND_MEAN",
    "STRICT_TYPED_ITEMIDS",
    "UNICODE",
    "_UNICODE",
    "_CRT_SECURE_NO_WARNINGS",
    "_SCL_SECURE_NO_WARNINGS",
    "BOOST_REGEX_STANDALONE",
    "NO_CXX11_REGEX",
];

#[test]
fn test_msvc_x64_full_sequence() {
    let flags = resolve("x86_64-pc-windows-msvc", false, false);

    let mut expected_c: Vec<String> = [
        "clang-cl.exe",
        "--target=x86_64-pc-windows-msvc",
        "-c",
        "/std:c17",
        "/O2",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    expected_c.extend(COMMON.iter().map(|d| format!("-D{}", d)));
    expected_c.extend(
        ["-D_WIN64", "-D_WIN32_WINNT=0x0600", "-DWINVER=0x0600"]
            .iter()
            .map(|s| s.to_string()),
    );
    expected_c.extend(
        [
            "/W4",
            "-Wextra",
            "-Wshadow",
            "-Wimplicit-fallthrough",
            "-Wformat=2",
            "-Wundef",
            "-Wcomma",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    assert_eq!(flags.c, expected_c);

    assert_eq!(
        &flags.cxx[..7],
        [
            "clang-cl.exe",
            "--target=x86_64-pc-windows-msvc",
            "-c",
            "/std:c++20",
            "/O2",
            "/EHsc",
            "/GR-"
        ]
    );
    assert_eq!(flags.cxx.last().unwrap(), "-Wold-style-cast");
    assert!(!flags.c.iter().any(|f| f == "-Wold-style-cast"));
}

#[test]
fn test_gnu_base_invocation() {
    let flags = resolve("x86_64-w64-windows-gnu", false, false);
    assert_eq!(
        &flags.c[..6],
        [
            "clang.exe",
            "--target=x86_64-w64-windows-gnu",
            "-municode",
            "-c",
            "-std=gnu17",
            "-O2"
        ]
    );
    assert_eq!(
        &flags.cxx[..7],
        [
            "clang++.exe",
            "--target=x86_64-w64-windows-gnu",
            "-municode",
            "-c",
            "-std=gnu++20",
            "-O2",
            "-fno-rtti"
        ]
    );
    assert!(flags.c.iter().any(|f| f == "-Wall"));
    assert!(!flags.c.iter().any(|f| f == "/W4"));
}

#[test]
fn test_c_and_cxx_differ_only_in_cxx_tokens() {
    for triple in [
        "x86_64-pc-windows-msvc",
        "i686-pc-windows-msvc",
        "aarch64-w64-windows-gnu",
        "armv7-w64-windows-gnu",
    ] {
        let flags = resolve(triple, false, false);
        let target_flag = format!("--target={}", triple);
        assert_eq!(flags.c.iter().filter(|f| **f == target_flag).count(), 1);
        assert_eq!(flags.cxx.iter().filter(|f| **f == target_flag).count(), 1);

        let cxx_specific = [
            "clang++.exe",
            "clang.exe",
            "/std:c17",
            "/std:c++20",
            "-std=gnu17",
            "-std=gnu++20",
            "/EHsc",
            "/GR-",
            "-fno-rtti",
            "-Wold-style-cast",
        ];
        let strip = |list: &[String]| -> Vec<String> {
            list.iter()
                .filter(|f| !cxx_specific.contains(&f.as_str()))
                .cloned()
                .collect()
        };
        assert_eq!(strip(&flags.c), strip(&flags.cxx), "{}", triple);
    }
}

#[test]
fn test_wide_vector_only_changes_version_and_march() {
    let narrow = resolve("x86_64-pc-windows-msvc", false, false);
    let wide = resolve("x86_64-pc-windows-msvc", true, false);

    for (narrow, wide) in [(&narrow.c, &wide.c), (&narrow.cxx, &wide.cxx)] {
        assert_eq!(wide.iter().filter(|f| *f == WIDE_VECTOR_FLAG).count(), 1);
        let without_march: Vec<&String> = wide.iter().filter(|f| *f != WIDE_VECTOR_FLAG).collect();
        assert_eq!(without_march.len(), narrow.len());

        let changed: Vec<(&str, &str)> = narrow
            .iter()
            .zip(without_march)
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        assert_eq!(
            changed,
            [
                ("-D_WIN32_WINNT=0x0600", "-D_WIN32_WINNT=0x0601"),
                ("-DWINVER=0x0600", "-DWINVER=0x0601"),
            ]
        );
    }
}

#[test]
fn test_arch_define_classes() {
    let cases: &[(&str, &[&str])] = &[
        ("i686-pc-windows-msvc", &["WIN32", "_WIN32_WINNT=0x0600", "WINVER=0x0600"]),
        ("aarch64-pc-windows-msvc", &["_WIN64", "_WIN32_WINNT=0x0A00", "WINVER=0x0A00"]),
        ("arm64-pc-windows-msvc", &["_WIN64", "_WIN32_WINNT=0x0A00", "WINVER=0x0A00"]),
        ("armv7-w64-windows-gnu", &["WIN32", "_WIN32_WINNT=0x0602", "WINVER=0x0602"]),
        ("arm-pc-windows-msvc", &["WIN32", "_WIN32_WINNT=0x0602", "WINVER=0x0602"]),
    ];
    for (triple, arch_defines) in cases {
        // wide_vector 只对 x86_64 生效
        let flags = resolve(triple, true, false);
        let all = defines(&flags.c);
        assert_eq!(&all[..COMMON.len()], COMMON, "{}", triple);
        assert_eq!(&all[COMMON.len()..], *arch_defines, "{}", triple);
        assert!(!flags.c.iter().any(|f| f == WIDE_VECTOR_FLAG));
        assert!(!flags.cxx.iter().any(|f| f == WIDE_VECTOR_FLAG));
    }
}

#[test]
fn test_unknown_arch_has_no_arch_defines() {
    let flags = resolve("riscv64-unknown-windows-gnu", true, false);
    assert_eq!(defines(&flags.c), COMMON);
    assert_eq!(defines(&flags.cxx), COMMON);
    assert!(flags.c.iter().any(|f| f == "-Wcomma"));
    assert!(!flags.c.iter().any(|f| f == WIDE_VECTOR_FLAG));
}

#[test]
fn test_force_cxx_override() {
    let msvc = resolve("x86_64-pc-windows-msvc", false, true);
    assert_eq!(msvc.cxx[2], "/TP");
    assert!(!msvc.c.iter().any(|f| f == "/TP"));
    assert!(msvc.c.iter().any(|f| f == "-Wold-style-cast"));

    let gnu = resolve("i686-w64-windows-gnu", false, true);
    assert_eq!(
        &gnu.cxx[..5],
        [
            "clang++.exe",
            "--target=i686-w64-windows-gnu",
            "-xc++",
            "-municode",
            "-c"
        ]
    );
    assert!(!gnu.c.iter().any(|f| f == "-xc++"));
}

#[test]
fn test_force_cxx_override_is_third_token_for_both_families() {
    for (triple, override_flag) in [
        ("x86_64-pc-windows-msvc", "/TP"),
        ("x86_64-w64-windows-gnu", "-xc++"),
    ] {
        let plain = resolve(triple, false, false);
        let forced = resolve(triple, false, true);
        assert_eq!(forced.cxx[2], override_flag, "{}", triple);

        // 去掉覆盖参数后与未强制时的 C++ 参数完全一致
        let mut without_override = forced.cxx.clone();
        without_override.remove(2);
        assert_eq!(without_override, plain.cxx, "{}", triple);
    }
}

#[test]
fn test_resolve_is_deterministic() {
    assert_eq!(
        resolve("x86_64-w64-windows-gnu", true, true),
        resolve("x86_64-w64-windows-gnu", true, true)
    );
}
