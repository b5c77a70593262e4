use criterion::{criterion_group, criterion_main, Criterion};

use luau_parser::{parse, print};

/// A representative module exercising most of the grammar: types, generics,
/// interpolation, compound assignment, and control flow.
const MODULE: &str = r#"--!strict
local Signal = {}
Signal.__index = Signal

export type Connection = { disconnect: (self: Connection) -> () }
export type Signal<T...> = typeof(setmetatable(
    {} :: { handlers: { (T...) -> () }, name: string },
    Signal
))

function Signal.new<T...>(name: string): Signal<T...>
    return setmetatable({ handlers = {}, name = name }, Signal)
end

function Signal:connect<T...>(handler: (T...) -> ()): Connection
    local index = #self.handlers + 1
    self.handlers[index] = handler
    return {
        disconnect = function()
            table.remove(self.handlers, index)
        end,
    }
end

function Signal:fire<T...>(...: T...)
    for _, handler in ipairs(self.handlers) do
        local ok, err = pcall(handler, ...)
        if not ok then
            warn(`handler for {self.name} failed: {err}`)
        end
    end
end

return Signal
"#;

fn parsing(c: &mut Criterion) {
    let large = MODULE.repeat(64);

    let mut group = c.benchmark_group("parse");
    group.bench_function("module", |b| b.iter(|| parse(MODULE).unwrap()));
    group.bench_function("large document", |b| b.iter(|| parse(&large).unwrap()));
    group.finish();
}

fn printing(c: &mut Criterion) {
    let cst = parse(MODULE).unwrap();

    let mut group = c.benchmark_group("print");
    group.bench_function("module", |b| b.iter(|| print(&cst)));
    group.finish();
}

criterion_group!(benches, parsing, printing);
criterion_main!(benches);
