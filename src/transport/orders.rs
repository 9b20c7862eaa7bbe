use crate::domain::{OrderDetail, OrderDetailLine, OrderId, OrderListOptions, OrderSummary, Params};

use super::registration::order_id;
use super::wire::{flag, int, optional_text, text, timestamp};
use super::{DecodeError, Response, XmlElement};

pub const GET_ORDER_DETAIL_COMMAND: &str = "GetOrderDetail";
pub const GET_ORDER_LIST_COMMAND: &str = "GetOrderList";

const FIRST_ORDER: u32 = 1;

pub fn encode_order_detail_form(order_id: &OrderId) -> Params {
    Params::new().with(OrderId::FIELD, order_id.as_str())
}

/// `OrderStatus` sits on the order itself for some order types and only on
/// the detail lines for others.
pub fn decode_order_detail_response(response: &Response) -> Result<OrderDetail, DecodeError> {
    let root = response.root();
    let order = root.find("Order").unwrap_or(root);
    Ok(OrderDetail {
        result: flag(order, "Result"),
        amount: optional_text(order, "OrderBillAmount"),
        status: optional_text(order, "OrderStatus"),
        details: order
            .children_named("OrderDetail")
            .map(decode_order_line)
            .collect::<Result<_, _>>()?,
    })
}

fn decode_order_line(line: &XmlElement) -> Result<OrderDetailLine, DecodeError> {
    Ok(OrderDetailLine {
        product_type: text(line, "ProductType"),
        description: text(line, "Description"),
        status: text(line, "Status"),
        quantity: int(line, "Quantity")?,
        amount: optional_text(line, "AmountPaid"),
        order_status: optional_text(line, "OrderStatus"),
    })
}

pub fn encode_order_list_form(options: &OrderListOptions) -> Params {
    let mut params = Params::new().with("Start", options.start.unwrap_or(FIRST_ORDER));
    if let Some(begin) = options.begin {
        params.insert("BeginDate", begin);
    }
    if let Some(end) = options.end {
        params.insert("EndDate", end);
    }
    params
}

pub fn decode_order_list_response(response: &Response) -> Result<Vec<OrderSummary>, DecodeError> {
    let Some(list) = response.root().find("OrderList") else {
        return Ok(Vec::new());
    };
    list.children_named("OrderDetail")
        .map(decode_order_summary)
        .collect()
}

fn decode_order_summary(order: &XmlElement) -> Result<OrderSummary, DecodeError> {
    Ok(OrderSummary {
        id: order_id(order)?,
        date: timestamp(order, "OrderDate")?,
        status: text(order, "StatusDesc"),
        processed: flag(order, "OrderProcessFlag"),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};

    use super::*;
    use crate::transport::validate;

    fn ok(body: &str) -> Response {
        validate(
            XmlElement::parse(&format!(
                "<interface-response>{body}<ErrCount>0</ErrCount><Done>true</Done></interface-response>"
            ))
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn order_detail_with_lines() {
        let response = ok("<Order><Result>True</Result><OrderBillAmount>8.95</OrderBillAmount>\
               <OrderDetail><ProductType>Register</ProductType>\
                 <Description>example.com</Description><Status>Successful</Status>\
                 <Quantity>1</Quantity><AmountPaid>8.95</AmountPaid>\
                 <OrderStatus>Closed</OrderStatus></OrderDetail>\
             </Order>");
        let detail = decode_order_detail_response(&response).unwrap();
        assert!(detail.result);
        assert_eq!(detail.amount.as_deref(), Some("8.95"));
        assert_eq!(detail.status.as_deref(), Some("Closed"));
        assert_eq!(detail.details.len(), 1);
        assert_eq!(detail.details[0].product_type, "Register");
        assert_eq!(detail.details[0].quantity, 1);
    }

    #[test]
    fn order_list_form_defaults_start() {
        assert_eq!(
            encode_order_list_form(&OrderListOptions::default()).to_wire(),
            vec![("Start".to_owned(), "1".to_owned())]
        );

        let options = OrderListOptions {
            start: Some(26),
            begin: NaiveDate::from_ymd_opt(2011, 1, 5),
            end: NaiveDate::from_ymd_opt(2011, 2, 28),
        };
        assert_eq!(
            encode_order_list_form(&options).to_wire(),
            vec![
                ("Start".to_owned(), "26".to_owned()),
                ("BeginDate".to_owned(), "01/05/2011".to_owned()),
                ("EndDate".to_owned(), "02/28/2011".to_owned()),
            ]
        );
    }

    #[test]
    fn order_list_entries() {
        let response = ok("<OrderList>\
               <OrderDetail><OrderID>157</OrderID><OrderDate>3/7/2011 1:02:03 PM</OrderDate>\
                 <StatusDesc>Processed</StatusDesc><OrderProcessFlag>True</OrderProcessFlag></OrderDetail>\
               <OrderDetail><OrderID>158</OrderID><StatusDesc>Pending</StatusDesc>\
                 <OrderProcessFlag>False</OrderProcessFlag></OrderDetail>\
             </OrderList>");
        let orders = decode_order_list_response(&response).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id.as_str(), "157");
        assert_eq!(orders[0].date.unwrap().year(), 2011);
        assert!(orders[0].processed);
        assert_eq!(orders[1].date, None);
        assert!(!orders[1].processed);
    }

    #[test]
    fn order_list_without_list_is_empty() {
        assert!(decode_order_list_response(&ok("")).unwrap().is_empty());
    }
}
