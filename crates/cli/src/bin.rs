//! The `wasmv` command line interface.

use anyhow::Context;
use wasmv::{
    B16x8, B32x4, B64x2, B8x16, Bits128, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8, U32x4,
    U64x2, U8x16, V128,
};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Prints every lane interpretation of a 128-bit vector.
    Show {
        /// The interpretation of the given lane values.
        shape: Shape,
        /// The value of each lane, starting with lane 0.
        ///
        /// A `v128` takes a single 128-bit integer. Mask lanes are `true`, `false`, `1` or `0`.
        /// Integers may be written in hexadecimal with a `0x` prefix. Hexadecimal lanes of
        /// signed shapes are read as two's complement bits, so `0xff` is `-1` in an `i8x16`.
        #[arg(required = true, allow_negative_numbers = true)]
        lanes: Vec<String>,
        /// Prints integer and mask lanes in hexadecimal.
        #[arg(long)]
        hex: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Shape {
    #[value(name = "v128")]
    V128,
    #[value(name = "i8x16")]
    I8x16,
    #[value(name = "i16x8")]
    I16x8,
    #[value(name = "i32x4")]
    I32x4,
    #[value(name = "i64x2")]
    I64x2,
    #[value(name = "u8x16")]
    U8x16,
    #[value(name = "u16x8")]
    U16x8,
    #[value(name = "u32x4")]
    U32x4,
    #[value(name = "u64x2")]
    U64x2,
    #[value(name = "b8x16")]
    B8x16,
    #[value(name = "b16x8")]
    B16x8,
    #[value(name = "b32x4")]
    B32x4,
    #[value(name = "b64x2")]
    B64x2,
    #[value(name = "f32x4")]
    F32x4,
    #[value(name = "f64x2")]
    F64x2,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match clap::ValueEnum::to_possible_value(self) {
            Some(value) => f.write_str(value.get_name()),
            None => std::fmt::Debug::fmt(self, f),
        }
    }
}

fn parse_int<T>(text: &str) -> anyhow::Result<T>
where
    T: num_traits::Num,
    T::FromStrRadixErr: std::error::Error + Send + Sync + 'static,
{
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => T::from_str_radix(hex, 16)?,
        None => T::from_str_radix(text, 10)?,
    };

    Ok(value)
}

fn parse_signed<S, U>(text: &str) -> anyhow::Result<S>
where
    S: num_traits::Num + Copy + 'static,
    S::FromStrRadixErr: std::error::Error + Send + Sync + 'static,
    U: num_traits::Num + num_traits::AsPrimitive<S>,
    U::FromStrRadixErr: std::error::Error + Send + Sync + 'static,
{
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => Ok(U::from_str_radix(hex, 16)?.as_()),
        None => Ok(S::from_str_radix(text, 10)?),
    }
}

fn parse_float<T>(text: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(text.parse::<T>()?)
}

fn parse_mask(text: &str) -> anyhow::Result<bool> {
    match text {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => anyhow::bail!("expected true, false, 1 or 0"),
    }
}

fn parse_lanes<T, const N: usize>(
    shape: Shape,
    lanes: &[String],
    parser: fn(&str) -> anyhow::Result<T>,
) -> anyhow::Result<[T; N]>
where
    T: Copy + Default,
{
    if lanes.len() != N {
        anyhow::bail!(
            "{shape} expects {N} lane values, but {} were given",
            lanes.len()
        );
    }

    let mut parsed = [T::default(); N];
    for (i, (lane, text)) in parsed.iter_mut().zip(lanes).enumerate() {
        *lane = parser(text).with_context(|| format!("could not parse lane {i} ({text:?})"))?;
    }

    Ok(parsed)
}

fn parse_vector(shape: Shape, lanes: &[String]) -> anyhow::Result<V128> {
    Ok(match shape {
        Shape::V128 => {
            let [bits] = parse_lanes::<u128, 1>(shape, lanes, parse_int)?;
            V128::from_bits(bits)
        }
        Shape::I8x16 => I8x16::from_lanes(parse_lanes(shape, lanes, parse_signed::<i8, u8>)?)
            .to_v128(),
        Shape::I16x8 => I16x8::from_lanes(parse_lanes(shape, lanes, parse_signed::<i16, u16>)?)
            .to_v128(),
        Shape::I32x4 => I32x4::from_lanes(parse_lanes(shape, lanes, parse_signed::<i32, u32>)?)
            .to_v128(),
        Shape::I64x2 => I64x2::from_lanes(parse_lanes(shape, lanes, parse_signed::<i64, u64>)?)
            .to_v128(),
        Shape::U8x16 => U8x16::from_lanes(parse_lanes(shape, lanes, parse_int)?).to_v128(),
        Shape::U16x8 => U16x8::from_lanes(parse_lanes(shape, lanes, parse_int)?).to_v128(),
        Shape::U32x4 => U32x4::from_lanes(parse_lanes(shape, lanes, parse_int)?).to_v128(),
        Shape::U64x2 => U64x2::from_lanes(parse_lanes(shape, lanes, parse_int)?).to_v128(),
        Shape::B8x16 => B8x16::from_lanes(parse_lanes(shape, lanes, parse_mask)?).to_v128(),
        Shape::B16x8 => B16x8::from_lanes(parse_lanes(shape, lanes, parse_mask)?).to_v128(),
        Shape::B32x4 => B32x4::from_lanes(parse_lanes(shape, lanes, parse_mask)?).to_v128(),
        Shape::B64x2 => B64x2::from_lanes(parse_lanes(shape, lanes, parse_mask)?).to_v128(),
        Shape::F32x4 => F32x4::from_lanes(parse_lanes(shape, lanes, parse_float)?).to_v128(),
        Shape::F64x2 => F64x2::from_lanes(parse_lanes(shape, lanes, parse_float)?).to_v128(),
    })
}

fn show(v: V128, hex: bool, out: &mut impl std::io::Write) -> std::io::Result<()> {
    macro_rules! integers {
        ($($name:ident as $prefix:literal),*) => {$(
            let lanes = v.reinterpret::<$name>();
            if hex {
                writeln!(out, "{}: {:x}", $prefix, lanes)?;
            } else {
                writeln!(out, "{}: {:?}", $prefix, lanes)?;
            }
        )*};
    }

    writeln!(out, "v128: {v:?}")?;

    integers! {
        I8x16 as "i8x16",
        I16x8 as "i16x8",
        I32x4 as "i32x4",
        I64x2 as "i64x2",
        U8x16 as "u8x16",
        U16x8 as "u16x8",
        U32x4 as "u32x4",
        U64x2 as "u64x2",
        B8x16 as "b8x16",
        B16x8 as "b16x8",
        B32x4 as "b32x4",
        B64x2 as "b64x2"
    }

    writeln!(out, "f32x4: {:?}", v.reinterpret::<F32x4>())?;
    writeln!(out, "f64x2: {:?}", v.reinterpret::<F64x2>())?;
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let arguments = <Arguments as clap::Parser>::parse();

    match arguments.command {
        Command::Show { shape, lanes, hex } => {
            let v = parse_vector(shape, &lanes)?;
            show(v, hex, &mut std::io::stdout().lock()).context("could not write to stdout")?;
            Ok(())
        }
    }
}
