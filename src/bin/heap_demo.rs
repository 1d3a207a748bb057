use bounded_heap::ordering::{float_order, natural_order};
use bounded_heap::{HeapError, MinHeap};

fn main() -> Result<(), HeapError> {
    println!("Testing with integers:");
    let mut int_heap = MinHeap::<i32, _>::new(10, natural_order)?;
    for value in &[5, 3, 7, 1, 4, 6, 2] {
        int_heap.insert(*value)?;
        println!("Inserted: {}", value);
    }

    println!("\nPopping everything out:");
    while let Ok(min) = int_heap.extract_min() {
        println!("Got: {}", min);
    }

    println!("\nTesting with floats:");
    let mut float_heap = MinHeap::<f32, _>::new(10, float_order)?;
    for value in &[5.5f32, 3.3, 7.7, 1.1, 4.4] {
        float_heap.insert(*value)?;
        println!("Inserted: {:.1}", value);
    }

    println!("\nPopping everything out:");
    while let Ok(min) = float_heap.extract_min() {
        println!("Got: {:.1}", min);
    }

    Ok(())
}
