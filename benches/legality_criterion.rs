use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_chess_board::game_state::chess_types::{Board, Color, Square};
use plum_chess_board::move_generation::legal_move_checks::is_valid_move;
use plum_chess_board::move_generation::legal_move_generator::all_legal_moves;
use plum_chess_board::utils::fen_parser::parse_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
    },
    BenchCase {
        name: "open_middlegame",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w",
    },
    BenchCase {
        name: "queens_only",
        fen: "3qk3/8/8/8/8/8/8/3QK3 w",
    },
];

fn load(case: &BenchCase) -> (Board, Color) {
    parse_fen(case.fen).expect("bench FEN should parse")
}

fn bench_is_valid_move_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid_move_all_pairs");
    group.throughput(Throughput::Elements(64 * 64));

    for case in CASES {
        let (board, side) = load(case);
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| {
                let mut legal = 0u32;
                for start in Square::all() {
                    for end in Square::all() {
                        legal += u32::from(is_valid_move(black_box(board), side, start, end));
                    }
                }
                black_box(legal)
            });
        });
    }

    group.finish();
}

fn bench_all_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_legal_moves");

    for case in CASES {
        let (board, side) = load(case);
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(all_legal_moves(black_box(board), side)).len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_is_valid_move_all_pairs, bench_all_legal_moves);
criterion_main!(benches);
