use gb_ir::Value;

pub trait Appendable {
    fn append_str(&mut self, s: &str);
    fn append_i64(&mut self, i: i64);
    fn append_f64(&mut self, f: f64);
    fn append_bool(&mut self, b: bool);
    fn append_value(&mut self, v: &Value);
}

impl Appendable for String {
    fn append_str(&mut self, s: &str) {
        self.push_str(s);
    }
    fn append_i64(&mut self, i: i64) {
        let mut buf = itoa::Buffer::new();
        self.push_str(buf.format(i));
    }
    fn append_f64(&mut self, f: f64) {
        if f.fract() == 0.0 && f.abs() < 9.0e15 {
            self.append_i64(f as i64);
        } else {
            let mut buf = ryu::Buffer::new();
            self.push_str(buf.format(f));
        }
    }
    fn append_bool(&mut self, b: bool) {
        self.push_str(if b { "true" } else { "false" });
    }
    fn append_value(&mut self, v: &Value) {
        match v {
            Value::Str(s) | Value::Url(s) | Value::Pointer(s) => self.append_str(s),
            Value::Number(n) => self.append_f64(*n),
            Value::Bool(b) => self.append_bool(*b),
            Value::Array(items) => {
                self.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.push_str(", ");
                    }
                    self.append_value(item);
                }
                self.push(']');
            }
        }
    }
}

/// Display text of a value: strings without quotes, integral numbers
/// without a fractional part.
pub fn value_to_string(v: &Value) -> String {
    let mut out = String::new();
    out.append_value(v);
    out
}
