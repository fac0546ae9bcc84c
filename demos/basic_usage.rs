// demos/basic_usage.rs
//! Basic usage example of the cursor codec

use bitcursor::prelude::*;

fn main() -> Result<()> {
    println!("=== Basic Cursor Usage ===\n");

    // 1. Produce a buffer with a growable writer
    let mut cur = BitCursor::writer(Vec::new());

    cur.write_u32(12345)?;
    cur.write_bytes(b"Hello, World!")?;
    cur.write_u8(0xFF)?;

    println!("Buffer length: {}", cur.len());
    println!("Cursor position: {}", cur.tell());

    // Read the data back
    cur.rewind();
    let num = cur.read_u32()?;
    let bytes = cur.read_bytes(13)?;
    let byte = cur.read_u8()?;

    println!("Read u32: {}", num);
    println!("Read bytes: {:?}", String::from_utf8_lossy(&bytes));
    println!("Read byte: 0x{:02X}", byte);

    println!("\n=== Bit-Level Packing ===\n");

    // Three fields packed into two bytes: 3 + 13 bits
    let mut packed = BitCursor::writer(vec![0u8; 2]);
    packed.set_endian(Endian::Big);
    packed.write_bits(0b101, 3)?;
    packed.write_sbits(-1000, 13)?;

    packed.rewind();
    println!("3-bit field:  {}", packed.read_bits(3)?);
    println!("13-bit field: {}", packed.read_sbits(13)?);

    println!("\n=== String Codecs ===\n");

    let mut strings = BitCursor::writer(Vec::new());
    strings.write_cstr("null-terminated")?;
    strings.write_pstring("length-prefixed", PrefixSize::One)?;

    strings.rewind();
    println!("Read cstr:    {:?}", strings.read_cstr()?);
    println!("Read pstring: {:?}", strings.read_pstring(PrefixSize::One)?);

    println!("\n=== Hexdump ===\n");
    strings.rewind();
    print!("{}", strings.hexdump(None));

    println!("\n=== Strict Reader ===\n");

    let mut reader = BitCursor::reader(vec![0x01, 0x02]);
    println!("u16 (LE): 0x{:04X}", reader.read_u16()?);
    match reader.read_u8() {
        Err(e) => println!("Reading past the end: {}", e),
        Ok(_) => unreachable!(),
    }

    Ok(())
}
