use hasm::{assemble, Error};

fn case(source: &str, expect: &[&str]) {
    let out = assemble(source).expect("assembly failed");
    let words: Vec<String> = out
        .words
        .iter()
        .map(|word| format!("{:016b}", word))
        .collect();
    for (idx, word) in words.iter().enumerate() {
        println!("{:>2}: {}", idx, word);
    }
    assert_eq!(words, expect);
}

fn errs(source: &str) -> Vec<(usize, Error)> {
    match assemble(source) {
        Ok(_) => panic!("expected errors from {:?}", source),
        Err(errs) => {
            for (idx, err) in &errs {
                println!("{:>2}: {}", idx, err);
            }
            errs
        }
    }
}

#[test]
fn add_two_and_three() {
    case(
        "@2\nD=A\n@3\nD=D+A\n@0\nM=D",
        &[
            "0000000000000010",
            "1110110000010000",
            "0000000000000011",
            "1110000010010000",
            "0000000000000000",
            "1110001100001000",
        ],
    );
}

#[test]
fn max_of_two() {
    let source = "\
// Computes R2 = max(R0, R1)
  @R0
  D=M              // D = first number
  @R1
  D=D-M            // D = first number - second number
  @OUTPUT_FIRST
  D;JGT            // if D>0 (first is greater) goto output_first
  @R1
  D=M              // D = second number
  @OUTPUT_D
  0;JMP            // goto output_d
(OUTPUT_FIRST)
  @R0
  D=M              // D = first number
(OUTPUT_D)
  @R2
  M=D              // M[2] = D (greatest number)
(INFINITE_LOOP)
  @INFINITE_LOOP
  0;JMP            // infinite loop
";
    case(
        source,
        &[
            "0000000000000000",
            "1111110000010000",
            "0000000000000001",
            "1111010011010000",
            "0000000000001010",
            "1110001100000001",
            "0000000000000001",
            "1111110000010000",
            "0000000000001100",
            "1110101010000111",
            "0000000000000000",
            "1111110000010000",
            "0000000000000010",
            "1110001100001000",
            "0000000000001110",
            "1110101010000111",
        ],
    );
}

#[test]
fn loop_label() {
    case(
        "(LOOP)\n@LOOP\n0;JMP",
        &["0000000000000000", "1110101010000111"],
    );
}

#[test]
fn variables_from_sixteen() {
    case(
        "@i\nM=1\n@j\nM=1\n@i\nD=M",
        &[
            "0000000000010000",
            "1110111111001000",
            "0000000000010001",
            "1110111111001000",
            "0000000000010000",
            "1111110000010000",
        ],
    );
}

#[test]
fn forward_reference() {
    case(
        "@END\n0;JMP\n(END)\n@END\n0;JMP",
        &[
            "0000000000000010",
            "1110101010000111",
            "0000000000000010",
            "1110101010000111",
        ],
    );
}

#[test]
fn adjacent_labels_share_address() {
    case(
        "(START)\n(BEGIN)\n@START\n@BEGIN",
        &["0000000000000000", "0000000000000000"],
    );
}

#[test]
fn trailing_label() {
    case("@END\n0;JMP\n(END)", &["0000000000000010", "1110101010000111"]);
}

#[test]
fn predefined_symbols() {
    let pairs = [
        ("SP", 0u16),
        ("LCL", 1),
        ("ARG", 2),
        ("THIS", 3),
        ("THAT", 4),
        ("R0", 0),
        ("R7", 7),
        ("R15", 15),
        ("SCREEN", 16384),
        ("KBD", 24576),
    ];
    let source: String = pairs.iter().map(|(name, _)| format!("@{}\n", name)).collect();
    let out = assemble(&source).expect("assembly failed");
    let expect: Vec<u16> = pairs.iter().map(|(_, addr)| *addr).collect();
    assert_eq!(out.words, expect);
}

#[test]
fn screen_and_kbd() {
    case(
        "@SCREEN\nM=-1\n@KBD\nD=M",
        &[
            "0100000000000000",
            "1110111010001000",
            "0110000000000000",
            "1111110000010000",
        ],
    );
}

#[test]
fn comments_and_whitespace() {
    case(
        "// whole line comment\n\n  @2   // inline\n  D = A ; J M P\n   \n",
        &["0000000000000010", "1110110000010111"],
    );
}

#[test]
fn numeric_bounds() {
    case(
        "@0\n@1\n@32767",
        &["0000000000000000", "0000000000000001", "0111111111111111"],
    );
}

#[test]
fn oversized_program() {
    let source = "0\n".repeat(65600);
    let out = assemble(&source).expect("assembly failed");
    assert_eq!(out.words.len(), 65600);
    assert!(out.words.iter().all(|&word| word == 0b1110101010000000));
}

#[test]
fn dump_handles_oversized_program() {
    use hasm::util;

    // The pc column clamps instead of wrapping past 0xFFFF.
    let source = "0\n".repeat(65600);
    let out = assemble(&source).expect("assembly failed");
    util::print_dump("huge.asm", &out.lines, &out.symbols);
}

#[test]
fn empty_source() {
    let out = assemble("").expect("assembly failed");
    assert!(out.words.is_empty());
    assert_eq!(out.text(), "");
}

#[test]
fn output_text_joins_words() {
    let out = assemble("@2\nD=A").expect("assembly failed");
    assert_eq!(out.text(), "0000000000000010\n1110110000010000");
}

#[test]
fn symbol_table_yaml() {
    let out = assemble("(LOOP)\n@counter\n@sum\n@counter\n0;JMP").expect("assembly failed");
    let yaml = out.symbols.to_yaml().expect("yaml failed");
    assert!(yaml.starts_with("SP: 0\n"));
    assert!(yaml.contains("KBD: 24576\n"));
    assert!(yaml.contains("LOOP: 0\n"));
    let counter = yaml.find("counter: 16").expect("counter missing");
    let sum = yaml.find("sum: 17").expect("sum missing");
    assert!(counter < sum);
}

// ----------------------------------------------------------------------------
// Failure cases

#[test]
fn unknown_mnemonics() {
    let errs = errs("D=B\nQ=D\nD;JXX");
    assert_eq!(errs.len(), 3);
    assert!(matches!(&errs[0], (0, Error::UnknownComp(s)) if s == "B"));
    assert!(matches!(&errs[1], (1, Error::UnknownDest(s)) if s == "Q"));
    assert!(matches!(&errs[2], (2, Error::UnknownJump(s)) if s == "JXX"));
}

#[test]
fn malformed_statements() {
    let errs = errs("@\n(LOOP\n()");
    assert_eq!(errs.len(), 3);
    assert!(errs
        .iter()
        .all(|(_, err)| matches!(err, Error::SyntaxError(_))));
}

#[test]
fn redefined_label() {
    let errs = errs("(X)\n@X\n(X)");
    assert_eq!(errs.len(), 1);
    assert!(matches!(&errs[0], (2, Error::RedefinedSymbol(s)) if s == "X"));
}

#[test]
fn label_shadows_builtin() {
    let errs = errs("(R5)\n@R5");
    assert!(matches!(&errs[0], (0, Error::RedefinedSymbol(s)) if s == "R5"));
}

#[test]
fn address_out_of_range() {
    let errs = errs("@32768");
    assert!(matches!(&errs[0], (0, Error::AddressOutOfRange(32768))));
}

#[test]
fn label_past_address_space() {
    let source = format!("{}(END)\n@END\n0;JMP", "0\n".repeat(65536));
    let errs = errs(&source);
    assert_eq!(errs.len(), 1);
    assert!(matches!(&errs[0], (65537, Error::AddressOutOfRange(65535))));
}

#[test]
fn variables_past_address_space() {
    let source: String = (0..65521).map(|n| format!("@v{}\n", n)).collect();
    let errs = errs(&source);
    assert_eq!(errs.len(), 32769);
    assert!(matches!(&errs[0], (32752, Error::AddressOutOfRange(32768))));
    assert!(matches!(errs.last().unwrap(), (65520, Error::AddressOutOfRange(65535))));
}

#[test]
fn invalid_immediate() {
    let errs = errs("@99999");
    assert!(matches!(&errs[0], (0, Error::InvalidImmediate(s)) if s == "99999"));
}

#[test]
fn parse_errors_gate_symbol_errors() {
    // The duplicate label is not reported while the file fails to parse.
    let errs = errs("D=B\n(X)\n(X)");
    assert_eq!(errs.len(), 1);
    assert!(matches!(&errs[0], (0, Error::UnknownComp(_))));
}

#[test]
fn symbol_errors_gate_encoding_errors() {
    let errs = errs("(X)\n(X)\n@32768");
    assert_eq!(errs.len(), 1);
    assert!(matches!(&errs[0], (1, Error::RedefinedSymbol(_))));
}

#[test]
fn undefined_symbol_with_foreign_table() {
    use hasm::codegen;
    use hasm::parser::Line;
    use hasm::symbols::SymbolTable;

    let (line, errs) = Line::parse(0, "@undef");
    assert!(errs.is_empty());
    let table = SymbolTable::new();
    let result = codegen::generate(&[line], &table);
    let errs = result.expect_err("expected undefined symbol");
    assert!(matches!(&errs[0], (0, Error::UndefinedSymbol(s)) if s == "undef"));
}
