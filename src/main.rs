//! jako - 일본어 -> 한국어 음차 변환 CLI
//!
//! 사용법:
//!   jako [--lang ko|ja] [TEXT...]
//!
//! TEXT 인자가 없으면 표준 입력을 줄 단위로 변환합니다.

use std::io::{self, BufRead, Write};

use jako::config::load_config;
use jako::{TargetLang, Transliterator};

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();

    let mut lang: Option<TargetLang> = None;
    let mut texts: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => match args.next() {
                Some(value) => match value.parse::<TargetLang>() {
                    Ok(parsed) => lang = Some(parsed),
                    Err(e) => {
                        eprintln!("{}", e);
                        std::process::exit(2);
                    }
                },
                None => {
                    eprintln!("--lang 뒤에 값이 필요합니다 (ko 또는 ja)");
                    std::process::exit(2);
                }
            },
            "--help" | "-h" => {
                println!("사용법: jako [--lang ko|ja] [TEXT...]");
                println!("TEXT 인자가 없으면 표준 입력을 줄 단위로 변환합니다.");
                return;
            }
            _ => texts.push(arg),
        }
    }

    // --lang 미지정 시 설정 파일의 기본 언어, 그것도 아니면 ko
    let lang = lang.unwrap_or_else(|| {
        config.default_lang.parse().unwrap_or_else(|e| {
            log::warn!("설정의 default_lang 무시: {}", e);
            TargetLang::Ko
        })
    });

    let transliterator = Transliterator::with_user_words(config.user_words);

    if !texts.is_empty() {
        println!("{}", transliterator.transliterate(&texts.join(" "), lang));
        return;
    }

    // 표준 입력 줄 단위 처리
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        match line {
            Ok(line) => {
                if writeln!(out, "{}", transliterator.transliterate(&line, lang)).is_err() {
                    break;
                }
            }
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        }
    }
}
